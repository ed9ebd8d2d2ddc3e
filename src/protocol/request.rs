use crate::error::FrameError;
use md5::{Digest, Md5};
use std::fmt;

/// Length of a [`FileHeader`] on the wire: 16 digest bytes + u32 size.
pub const FILE_HEADER_LEN: usize = 20;

/// Request method, sent as the first byte of every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Method {
    Echo = 0,
    Upload = 1,
    Delete = 2,
    List = 3,
    Get = 4,
}

impl Method {
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Echo => "echo",
            Method::Upload => "upload",
            Method::Delete => "delete",
            Method::List => "list",
            Method::Get => "get",
        };
        f.write_str(name)
    }
}

/// Identifies a stored file by content digest and size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub md5: [u8; 16],
    pub size: u32,
}

impl FileHeader {
    /// Header describing `content`.
    pub fn for_content(content: &[u8]) -> Result<Self, FrameError> {
        let size = u32::try_from(content.len()).map_err(|_| FrameError::ContentTooLarge {
            size: content.len(),
            max: u32::MAX,
        })?;
        Ok(Self {
            md5: Md5::digest(content).into(),
            size,
        })
    }

    /// Header from a 32-character hex digest and a size.
    pub fn from_hex(md5_hex: &str, size: u32) -> Result<Self, FrameError> {
        if md5_hex.len() != 32 {
            return Err(FrameError::InvalidDigest(md5_hex.to_string()));
        }
        let mut md5 = [0u8; 16];
        hex::decode_to_slice(md5_hex, &mut md5)
            .map_err(|_| FrameError::InvalidDigest(md5_hex.to_string()))?;
        Ok(Self { md5, size })
    }

    pub fn md5_hex(&self) -> String {
        hex::encode(self.md5)
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[..16].copy_from_slice(&self.md5);
        out[16..].copy_from_slice(&self.size.to_be_bytes());
        out
    }
}

/// A complete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Echo(Vec<u8>),
    Upload { header: FileHeader, content: Vec<u8> },
    Delete(FileHeader),
    List,
    Get(String),
}

impl Request {
    /// Upload request for `content`, with its digest and size computed.
    pub fn upload(content: Vec<u8>) -> Result<Self, FrameError> {
        let header = FileHeader::for_content(&content)?;
        Ok(Request::Upload { header, content })
    }

    pub fn method(&self) -> Method {
        match self {
            Request::Echo(_) => Method::Echo,
            Request::Upload { .. } => Method::Upload,
            Request::Delete(_) => Method::Delete,
            Request::List => Method::List,
            Request::Get(_) => Method::Get,
        }
    }

    /// Serialize to the frame sent over the link.
    pub fn encode(&self) -> Vec<u8> {
        let mut frame = vec![self.method().as_byte()];
        match self {
            Request::Echo(message) => frame.extend_from_slice(message),
            Request::Upload { header, content } => {
                frame.reserve(FILE_HEADER_LEN + content.len());
                frame.extend_from_slice(&header.to_bytes());
                frame.extend_from_slice(content);
            }
            Request::Delete(header) => frame.extend_from_slice(&header.to_bytes()),
            Request::List => {}
            Request::Get(name) => frame.extend_from_slice(name.as_bytes()),
        }
        frame
    }
}

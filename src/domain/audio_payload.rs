use bytes::Bytes;

/// Raw audio bytes received from the caller. The relay never inspects the contents.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    data: Bytes,
    content_type: Option<String>,
}

impl AudioPayload {
    pub fn new(data: Bytes, content_type: Option<String>) -> Self {
        Self { data, content_type }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestData {
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = Some(body);
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn into_parts(self) -> (HashMap<String, String>, Option<Vec<u8>>) {
        (self.headers, self.body)
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn set_header__should_overwrite_duplicates() {
        let mut request = RequestData::new();
        request.set_header("TTL", "0");
        request.set_header("TTL", "60");

        assert_eq!(request.header("TTL"), Some("60"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn into_parts__should_hand_over_headers_and_body() {
        let mut request = RequestData::new();
        request.set_header("Content-Length", "3");
        request.set_body(vec![1, 2, 3]);

        let (headers, body) = request.into_parts();
        assert_eq!(headers.get("Content-Length").map(String::as_str), Some("3"));
        assert_eq!(body, Some(vec![1, 2, 3]));
    }
}

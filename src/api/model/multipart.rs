use crate::api::error::Error::MissingPart;
use crate::api::error::Result;

/// Multipart/form-data body held as named UTF-8 string parts, kept in
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct MultipartFormData {
    parts: Vec<(String, String)>,
}

impl MultipartFormData {
    pub fn new() -> Self {
        MultipartFormData { parts: Vec::new() }
    }

    pub fn add_part(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.parts.push((name.into(), content.into()));
    }

    /// First part with the given name, if any.
    pub fn part(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(part_name, _)| part_name == name)
            .map(|(_, content)| content.as_str())
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.part(name).is_some()
    }

    /// Like [`MultipartFormData::part`], but absence is an error. For
    /// callers that require the part.
    pub fn require_part(&self, name: &str) -> Result<&str> {
        self.part(name).ok_or_else(|| MissingPart(name.to_owned()))
    }

    pub fn parts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MultipartFormData;
    use crate::api::error::Error;

    #[test]
    fn test_part_lookup() {
        let mut form = MultipartFormData::new();
        form.add_part("instanceId", "app_localhost_80");
        form.add_part("endpoint", "10.0.0.5:8080");

        assert_eq!(form.len(), 2);
        assert_eq!(form.part("instanceId"), Some("app_localhost_80"));
        assert_eq!(form.part("endpoint"), Some("10.0.0.5:8080"));
        assert!(!form.has_part("other"));
    }

    #[test]
    fn test_require_part_absent() {
        let form = MultipartFormData::new();
        let err = form.require_part("instanceId").unwrap_err();
        assert!(matches!(err, Error::MissingPart(name) if name == "instanceId"));
    }

    #[test]
    fn test_insertion_order() {
        let mut form = MultipartFormData::new();
        form.add_part("b", "2");
        form.add_part("a", "1");
        let names: Vec<&str> = form.parts().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}

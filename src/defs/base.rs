use serde::Serialize;

use crate::defs::annotation::Annotations;
use crate::defs::DefsError;
use crate::traits::Annotated;
use crate::ProtocolResult;

/// Identity and annotation storage shared by every definition kind.
///
/// The name is fixed at construction. Annotations may be added or
/// overwritten during the build phase; once a definition is published the
/// whole object is treated as read-only.
#[derive(Debug, Clone, Serialize)]
pub struct BaseDef {
    name:        String,
    annotations: Annotations,
}

impl BaseDef {
    /// Fails if `name` is empty; a definition is never unnamed.
    pub fn new(name: String) -> ProtocolResult<Self> {
        if name.is_empty() {
            return Err(DefsError::EmptyName.into());
        }

        Ok(BaseDef {
            name,
            annotations: Annotations::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Annotated for BaseDef {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::BaseDef;
    use crate::defs::annotation::AnnotationName;
    use crate::traits::Annotated;

    #[test]
    fn test_empty_name_rejected() {
        assert!(BaseDef::new("".to_owned()).is_err());
        assert!(BaseDef::new("Ping".to_owned()).is_ok());
    }

    #[test]
    fn test_annotation_lookup() {
        let mut base = BaseDef::new("Ping".to_owned()).unwrap();
        assert_eq!(base.annotation("com.vendor.Custom"), None);

        base.set_annotation("com.vendor.Custom".to_owned(), "abc".to_owned());
        assert_eq!(base.annotation("com.vendor.Custom"), Some("abc"));

        // overwrite keeps a single entry per key
        base.set_annotation("com.vendor.Custom".to_owned(), "xyz".to_owned());
        assert_eq!(base.annotation("com.vendor.Custom"), Some("xyz"));
        assert_eq!(base.annotations().len(), 1);
    }

    #[test]
    fn test_doc_string() {
        let mut base = BaseDef::new("Ping".to_owned()).unwrap();
        assert_eq!(base.doc_string(), None);

        base.annotate(AnnotationName::DocString, "a ping member".to_owned());
        assert_eq!(base.doc_string(), Some("a ping member"));
    }
}

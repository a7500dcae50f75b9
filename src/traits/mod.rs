use crate::defs::{is_flag_set, AnnotationName, Annotations};

/// Annotation read/write contract shared by every definition kind.
///
/// Consumers (introspection serializer, marshaler) only read; the mutators
/// exist for the definition builder during the build phase.
pub trait Annotated {
    fn annotations(&self) -> &Annotations;

    fn annotations_mut(&mut self) -> &mut Annotations;

    /// The annotation value for `key`, or `None` if not present.
    fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations().get(key).map(String::as_str)
    }

    /// Inserts or overwrites an annotation under a raw key.
    fn set_annotation(&mut self, key: String, value: String) {
        self.annotations_mut().insert(key, value);
    }

    /// Inserts or overwrites a well-known annotation.
    fn annotate(&mut self, name: AnnotationName, value: String) {
        self.set_annotation(name.as_key().to_owned(), value);
    }

    /// Whether a well-known flag annotation is set. Only the literal value
    /// "true" (case-insensitive) counts; absence or anything else is false.
    fn flag(&self, name: AnnotationName) -> bool {
        is_flag_set(self.annotation(name.as_key()))
    }

    fn doc_string(&self) -> Option<&str> {
        self.annotation(AnnotationName::DocString.as_key())
    }

    fn is_deprecated(&self) -> bool {
        self.flag(AnnotationName::Deprecated)
    }
}

/// Common surface of callable/emittable interface members, letting the
/// marshaling layer validate signals and method calls uniformly.
pub trait Member: Annotated {
    fn name(&self) -> &str;

    fn interface_name(&self) -> &str;

    /// Input parameter signature. May be empty.
    fn signature(&self) -> &str;

    /// Reply signature; empty for fire-and-forget members.
    fn reply_signature(&self) -> &str;
}

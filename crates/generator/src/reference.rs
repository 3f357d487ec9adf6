//! Resolution of `$ref` pointers to referenced type names

/// Type token rendered when a reference cannot be resolved
pub const ANY_TYPE: &str = "any";

/// Return the final `/`-delimited segment of a reference as the referenced type name.
///
/// An absent or empty reference, or one whose final segment is empty, yields [`ANY_TYPE`].
pub fn type_name_from_ref(reference: Option<&str>) -> &str {
    match reference {
        Some(reference) if !reference.is_empty() => {
            let name = reference.rsplit('/').next().unwrap_or_default();
            if name.is_empty() {
                ANY_TYPE
            } else {
                name
            }
        }
        _ => ANY_TYPE,
    }
}

/// Non-schema types that references may point at.
///
/// These never produce an import; they render as a fixed TypeScript type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Raw byte stream (`InputStream`), rendered as `object`
    ByteStream,

    /// Uploaded file (`File`, `MultipartFile`, ...), rendered as `any`
    File,
}

impl PlaceholderKind {
    /// All kinds, in the order they are matched
    pub const ALL: [PlaceholderKind; 2] = [PlaceholderKind::ByteStream, PlaceholderKind::File];

    /// Token whose presence in a referenced name identifies this kind
    pub fn marker(&self) -> &'static str {
        match self {
            PlaceholderKind::ByteStream => "InputStream",
            PlaceholderKind::File => "File",
        }
    }

    /// TypeScript type rendered in place of the reference
    pub fn rendered_type(&self) -> &'static str {
        match self {
            PlaceholderKind::ByteStream => "object",
            PlaceholderKind::File => ANY_TYPE,
        }
    }

    /// Detect the placeholder kind of a referenced type name
    pub fn detect(type_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| type_name.contains(kind.marker()))
    }
}

/// Outcome of resolving a `$ref`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRef {
    /// Reference to a known non-schema placeholder type
    Placeholder(PlaceholderKind),

    /// Reference to another schema definition
    Named(String),
}

/// Resolve a reference, consulting the placeholder kinds before generic resolution
pub fn resolve_ref(reference: &str) -> ResolvedRef {
    let name = type_name_from_ref(Some(reference));
    match PlaceholderKind::detect(name) {
        Some(kind) => ResolvedRef::Placeholder(kind),
        None => ResolvedRef::Named(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_from_ref() {
        assert_eq!(type_name_from_ref(Some("#/definitions/Order")), "Order");
        assert_eq!(type_name_from_ref(Some("#/components/schemas/Pet")), "Pet");
        assert_eq!(type_name_from_ref(Some("Plain")), "Plain");
    }

    #[test]
    fn test_type_name_from_ref_fallback() {
        assert_eq!(type_name_from_ref(None), ANY_TYPE);
        assert_eq!(type_name_from_ref(Some("")), ANY_TYPE);
        assert_eq!(type_name_from_ref(Some("#/definitions/")), ANY_TYPE);
    }

    #[test]
    fn test_placeholder_detection() {
        assert_eq!(
            PlaceholderKind::detect("InputStream"),
            Some(PlaceholderKind::ByteStream)
        );
        assert_eq!(PlaceholderKind::detect("File"), Some(PlaceholderKind::File));
        assert_eq!(
            PlaceholderKind::detect("MultipartFile"),
            Some(PlaceholderKind::File)
        );
        // byte stream wins when both markers appear
        assert_eq!(
            PlaceholderKind::detect("FileInputStream"),
            Some(PlaceholderKind::ByteStream)
        );
        assert_eq!(PlaceholderKind::detect("Order"), None);
    }

    #[test]
    fn test_placeholder_rendering() {
        assert_eq!(PlaceholderKind::ByteStream.rendered_type(), "object");
        assert_eq!(PlaceholderKind::File.rendered_type(), "any");
    }

    #[test]
    fn test_resolve_ref() {
        assert_eq!(
            resolve_ref("#/definitions/Tag"),
            ResolvedRef::Named("Tag".to_string())
        );
        assert_eq!(
            resolve_ref("#/definitions/InputStream"),
            ResolvedRef::Placeholder(PlaceholderKind::ByteStream)
        );
        assert_eq!(
            resolve_ref("#/definitions/MultipartFile"),
            ResolvedRef::Placeholder(PlaceholderKind::File)
        );
    }
}

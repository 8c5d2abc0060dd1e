//! Type mapping between specification types and Core Data attribute types.

use crate::naming::to_model_name;

/// The single opaque type used to declare any collection-valued field.
///
/// The backing store persists collections as homogeneous opaque blobs, so a
/// field declaration cannot carry an element type; only the construction
/// expression stays fully typed.
pub const TRANSFORMABLE: &str = "Transformable";

/// Immutable mapping from specification type names to target type names.
///
/// The table is total over the known primitive vocabulary. An unmapped name
/// is treated as a user-defined model reference rather than an error, so the
/// lookup never fails.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapping {
    entries: &'static [(&'static str, &'static str)],
    /// The target's own primitive type names.
    primitives: &'static [&'static str],
}

/// Type mapping for the Swift / Core Data target.
///
/// All integer widths collapse to one 32-bit attribute type, all floating
/// variants to one double-precision type, and all bulk collection kinds to
/// the opaque placeholder.
pub const COREDATA_MAPPING: TypeMapping = TypeMapping {
    entries: &[
        ("array", TRANSFORMABLE),
        ("List", TRANSFORMABLE),
        ("map", TRANSFORMABLE),
        ("date", "Date"),
        ("Date", "Date"),
        ("DateTime", "Date"),
        ("boolean", "Boolean"),
        ("string", "String"),
        ("char", "String"),
        ("short", "Integer 32"),
        ("int", "Integer 32"),
        ("long", "Integer 32"),
        ("integer", "Integer 32"),
        ("Integer", "Integer 32"),
        ("float", "Double"),
        ("number", "Double"),
        ("double", "Double"),
        ("object", "String"),
        ("file", "Binary"),
    ],
    primitives: &["Int", "Float", "Double", "Bool", "Void", "String", "Character"],
};

impl TypeMapping {
    /// Look up the target name mapped to a specification type name.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(from, _)| *from == name)
            .map(|(_, to)| *to)
    }

    /// Returns true when `name` is one of the target's own primitive types.
    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(&name)
    }

    /// Map a specification type name to a target type name.
    ///
    /// An unmapped name falls through to model-name normalization of the
    /// original, so a user-defined reference and a typo land in the same
    /// place; this function never fails.
    pub fn map(&self, name: &str) -> String {
        let target = self.lookup(name).unwrap_or(name);
        to_model_name(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_family_collapses() {
        for name in ["short", "int", "long", "integer"] {
            assert_eq!(COREDATA_MAPPING.map(name), "Integer 32", "for {name}");
        }
    }

    #[test]
    fn test_float_family_collapses() {
        for name in ["float", "number", "double"] {
            assert_eq!(COREDATA_MAPPING.map(name), "Double", "for {name}");
        }
    }

    #[test]
    fn test_collection_kinds_collapse_to_placeholder() {
        for name in ["array", "List", "map"] {
            assert_eq!(COREDATA_MAPPING.map(name), TRANSFORMABLE, "for {name}");
        }
    }

    #[test]
    fn test_date_variants() {
        for name in ["date", "Date", "DateTime"] {
            assert_eq!(COREDATA_MAPPING.map(name), "Date", "for {name}");
        }
    }

    #[test]
    fn test_opaque_fallbacks() {
        assert_eq!(COREDATA_MAPPING.map("object"), "String");
        assert_eq!(COREDATA_MAPPING.map("file"), "Binary");
        assert_eq!(COREDATA_MAPPING.map("boolean"), "Boolean");
    }

    #[test]
    fn test_unmapped_name_becomes_model_reference() {
        assert_eq!(COREDATA_MAPPING.map("Pet"), "Pet");
        assert_eq!(COREDATA_MAPPING.map("pet"), "Pet");
        assert_eq!(COREDATA_MAPPING.map("order_line"), "Order_line");
    }

    #[test]
    fn test_primitive_set() {
        assert!(COREDATA_MAPPING.is_primitive("String"));
        assert!(COREDATA_MAPPING.is_primitive("Double"));
        assert!(!COREDATA_MAPPING.is_primitive("Transformable"));
        assert!(!COREDATA_MAPPING.is_primitive("Integer 32"));
    }
}

//! Static type descriptors: identity, ancestry, declared attributes.
//!
//! Instead of probing an object for getters and setters at runtime, each
//! record type carries an explicit descriptor of what it declares. The
//! descriptor's stable name keys the rule registry, and its parent link
//! gives the registry an explicit ancestor chain to merge rules over.

/// Describes one record type.
///
/// Descriptors are intended to live in statics so parent links are plain
/// `&'static` references:
///
/// ```rust
/// use standin::TypeInfo;
///
/// static VEHICLE: TypeInfo = TypeInfo::new("Vehicle", None, &["wheels"]);
/// static CAR: TypeInfo = TypeInfo::new("Car", Some(&VEHICLE), &["doors"]);
///
/// assert!(CAR.declares("doors"));
/// assert!(CAR.declares("wheels")); // inherited
/// assert!(!VEHICLE.declares("doors"));
/// ```
#[derive(Debug)]
pub struct TypeInfo {
    name: &'static str,
    parent: Option<&'static TypeInfo>,
    attributes: &'static [&'static str],
}

impl TypeInfo {
    /// Describe a type by its stable name, optional parent, and the
    /// attribute keys it declares itself (not counting inherited ones).
    pub const fn new(
        name: &'static str,
        parent: Option<&'static TypeInfo>,
        attributes: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            parent,
            attributes,
        }
    }

    /// The stable identifier this type is registered under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ancestor chain from the root type down to `self`, inclusive.
    pub fn ancestry(&'static self) -> Vec<&'static TypeInfo> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(info) = current {
            chain.push(info);
            current = info.parent;
        }
        chain.reverse();
        chain
    }

    /// Whether this type or any ancestor declares `key` as an attribute.
    pub fn declares(&self, key: &str) -> bool {
        let mut current = Some(self);
        while let Some(info) = current {
            if info.attributes.contains(&key) {
                return true;
            }
            current = info.parent;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GRANDPARENT: TypeInfo = TypeInfo::new("Grandparent", None, &["surname"]);
    static PARENT: TypeInfo = TypeInfo::new("Parent", Some(&GRANDPARENT), &["job"]);
    static CHILD: TypeInfo = TypeInfo::new("Child", Some(&PARENT), &["school"]);

    #[test]
    fn name_is_stable() {
        assert_eq!(CHILD.name(), "Child");
    }

    #[test]
    fn ancestry_runs_root_to_self() {
        let names: Vec<&str> = CHILD.ancestry().iter().map(|info| info.name()).collect();
        assert_eq!(names, ["Grandparent", "Parent", "Child"]);
    }

    #[test]
    fn root_ancestry_is_just_itself() {
        let names: Vec<&str> = GRANDPARENT
            .ancestry()
            .iter()
            .map(|info| info.name())
            .collect();
        assert_eq!(names, ["Grandparent"]);
    }

    #[test]
    fn declares_covers_own_and_inherited_attributes() {
        assert!(CHILD.declares("school"));
        assert!(CHILD.declares("job"));
        assert!(CHILD.declares("surname"));
        assert!(!CHILD.declares("salary"));
    }

    #[test]
    fn declarations_do_not_leak_to_ancestors() {
        assert!(!PARENT.declares("school"));
        assert!(!GRANDPARENT.declares("job"));
    }
}

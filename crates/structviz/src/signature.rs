//! Member signature lines for record-shaped labels.
//!
//! A signature is `<visibility> <lifetime> <member>` joined by single spaces,
//! so an instance member carries an empty middle field. Lines are terminated
//! with `\l`, which left-justifies them inside a record label.

use structviz_core::element::{Element, Lifetime, Method, Property, Visibility};

/// Left-justified line terminator inside a label.
pub const LINE_BREAK: &str = "\\l";

/// Marker for static members, escaped for record labels.
pub const STATIC_MARKER: &str = "\\<static\\>";

/// Order in which visibility blocks are listed.
const VISIBILITY_ORDER: [Visibility; 3] = [
    Visibility::Private,
    Visibility::Protected,
    Visibility::Public,
];

/// Returns the UML glyph for a visibility.
pub fn visibility_glyph(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "+",
        Visibility::Protected => "~",
        Visibility::Private => "-",
    }
}

/// Returns the lifetime marker, empty for instance members.
pub fn lifetime_marker(lifetime: Lifetime) -> &'static str {
    match lifetime {
        Lifetime::Static => STATIC_MARKER,
        Lifetime::Instance => "",
    }
}

/// A member that can be rendered as a single signature line.
pub trait Signature: Element {
    /// Renders the member without visibility or lifetime.
    fn rendering(&self) -> String;

    /// Renders the full signature line.
    fn signature(&self) -> String {
        [
            visibility_glyph(self.visibility()),
            lifetime_marker(self.lifetime()),
            self.rendering().as_str(),
        ]
        .join(" ")
    }
}

impl Signature for Method {
    fn rendering(&self) -> String {
        format!("{}()", self.name())
    }
}

impl Signature for Property {
    fn rendering(&self) -> String {
        let accessors: Vec<&str> = [
            self.has_getter().then_some("get"),
            self.has_setter().then_some("set"),
        ]
        .into_iter()
        .flatten()
        .collect();
        [accessors.join("/").as_str(), self.name()].join(" ")
    }
}

/// Combines member signatures into label text.
///
/// Members are grouped as private, protected, then public; each group keeps
/// the input order. Every line ends with [`LINE_BREAK`].
///
/// # Examples
///
/// ```
/// use structviz::signature::combine_signatures;
/// use structviz_core::element::{ElementInfo, Method, Visibility};
///
/// let methods = [
///     Method::new(ElementInfo::root("run")),
///     Method::new(ElementInfo::root("check").with_visibility(Visibility::Private)),
/// ];
/// assert_eq!(combine_signatures(&methods), "-  check()\\l+  run()\\l");
/// ```
pub fn combine_signatures<'a, T, I>(members: I) -> String
where
    T: Signature + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let members: Vec<&T> = members.into_iter().collect();
    VISIBILITY_ORDER
        .iter()
        .flat_map(|&visibility| {
            members
                .iter()
                .filter(move |member| member.visibility() == visibility)
        })
        .map(|member| format!("{}{LINE_BREAK}", member.signature()))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use structviz_core::{QualifiedName, element::ElementInfo};

    use super::*;

    fn method(name: &str, visibility: Visibility) -> Method {
        Method::new(ElementInfo::root(name).with_visibility(visibility))
    }

    fn property(name: &str, getter: bool, setter: bool) -> Property {
        Property::new(ElementInfo::root(name), QualifiedName::single("T"))
            .with_getter(getter)
            .with_setter(setter)
    }

    #[test]
    fn test_method_signature() {
        assert_eq!(method("run", Visibility::Public).signature(), "+  run()");
        assert_eq!(
            method("check", Visibility::Protected).signature(),
            "~  check()"
        );
    }

    #[test]
    fn test_static_method_signature() {
        let method = Method::new(
            ElementInfo::root("create")
                .with_visibility(Visibility::Private)
                .with_lifetime(Lifetime::Static),
        );
        assert_eq!(method.signature(), "- \\<static\\> create()");
    }

    #[test]
    fn test_property_accessors() {
        assert_eq!(property("x", true, false).signature(), "+  get x");
        assert_eq!(property("x", false, true).signature(), "+  set x");
        assert_eq!(property("x", true, true).signature(), "+  get/set x");
        assert_eq!(property("x", false, false).signature(), "+   x");
    }

    #[test]
    fn test_combine_orders_by_visibility() {
        let methods = [
            method("a", Visibility::Public),
            method("b", Visibility::Private),
            method("c", Visibility::Protected),
            method("d", Visibility::Private),
        ];
        assert_eq!(
            combine_signatures(&methods),
            "-  b()\\l-  d()\\l~  c()\\l+  a()\\l"
        );
    }

    #[test]
    fn test_combine_empty() {
        let methods: [Method; 0] = [];
        assert_eq!(combine_signatures(&methods), "");
    }

    fn visibility_strategy() -> impl Strategy<Value = Visibility> {
        prop_oneof![
            Just(Visibility::Private),
            Just(Visibility::Protected),
            Just(Visibility::Public),
        ]
    }

    proptest! {
        #[test]
        fn prop_blocks_never_interleave(visibilities in proptest::collection::vec(visibility_strategy(), 0..16)) {
            let methods: Vec<Method> = visibilities
                .iter()
                .enumerate()
                .map(|(idx, &visibility)| method(&format!("m{idx}"), visibility))
                .collect();

            let combined = combine_signatures(&methods);
            let lines: Vec<&str> = combined
                .split(LINE_BREAK)
                .filter(|line| !line.is_empty())
                .collect();
            prop_assert_eq!(lines.len(), methods.len());

            let rank = |line: &str| match &line[..1] {
                "-" => 0,
                "~" => 1,
                _ => 2,
            };
            let ranks: Vec<i32> = lines.iter().map(|line| rank(line)).collect();
            prop_assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));

            for glyph in ["-", "~", "+"] {
                let expected: Vec<String> = methods
                    .iter()
                    .filter(|m| visibility_glyph(m.visibility()) == glyph)
                    .map(|m| m.signature())
                    .collect();
                let actual: Vec<String> = lines
                    .iter()
                    .filter(|line| line.starts_with(glyph))
                    .map(|line| line.to_string())
                    .collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}

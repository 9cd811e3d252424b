#![cfg(feature = "ext")]

use enumerant::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Enumerant)]
enum Component {
    Scheme,
    Authority,
    UserInfo,
    User,
    Password,
    Host,
    Port,
    #[enumerant(alias = Test)]
    Path = 12,
    Query,
    Fragment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Enumerant)]
#[enumerant(unscoped)]
enum Component1 {
    Scheme,
    Authority,
    Path = 12,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Enumerant)]
#[enumerant(scope = "net::uri::Part")]
enum Part {
    #[enumerant(rename = "scheme")]
    Scheme,
    r#Type,
    Host,
}

#[test]
fn unscoped_names() {
    assert_eq!(Component::unscoped_names()[7], "Path");
    assert_eq!(Component::enum_to_unscoped_string(Component::Port), Some("Port"));
    assert_eq!(Component::unscoped_string_to_enum("Query"), Some(Component::Query));
    assert_eq!(Component::unscoped_string_to_enum("Component::Query"), None);
    assert_eq!(Component1::unscoped_names(), Component1::names());
    assert_eq!(Component1::unscoped_string_to_enum("Path"), Some(Component1::Path));
}

#[test]
fn add_and_remove_scope() {
    assert_eq!(Component::add_scope("Path"), "Component::Path");
    assert_eq!(Component::add_scope("Component::Path"), "Component::Path");
    assert_eq!(Component::add_scope("Nowhere"), "Nowhere");
    assert_eq!(Component::remove_scope("Component::Path"), "Path");
    assert_eq!(Component::remove_scope("Path"), "Path");
    assert_eq!(Component::remove_scope("Other::Path"), "Other::Path");

    assert_eq!(Component1::add_scope("Path"), "Path");
    assert_eq!(Component1::remove_scope("Path"), "Path");
}

#[test]
fn scope_conversions_are_idempotent() {
    for &name in Component::names().iter().chain(Component::unscoped_names()) {
        let scoped = Component::add_scope(name);
        assert_eq!(Component::add_scope(scoped), scoped);
        let unscoped = Component::remove_scope(name);
        assert_eq!(Component::remove_scope(unscoped), unscoped);
        assert_eq!(Component::add_scope(unscoped), scoped);
    }
}

#[test]
fn has_scope() {
    assert!(Component::has_scope("Component::Host"));
    assert!(!Component::has_scope("Host"));
    assert!(!Component::has_scope("Component::Hostname"));
    assert!(!Component1::has_scope("Host"));
}

#[test]
fn custom_scope_and_renames() {
    assert_eq!(Part::type_name(), "net::uri::Part");
    assert_eq!(
        Part::names(),
        ["net::uri::Part::scheme", "net::uri::Part::Type", "net::uri::Part::Host"],
    );
    assert_eq!(Part::unscoped_names(), ["scheme", "Type", "Host"]);
    assert_eq!(Part::add_scope("Type"), "net::uri::Part::Type");
    assert_eq!(Part::string_to_enum("net::uri::Part::scheme"), Some(Part::Scheme));
    assert_eq!(Part::string_to_enum("net::uri::Part::Scheme"), None);
}

struct Accumulator {
    total: i128,
    calls: usize,
}

impl Accumulator {
    fn process(&mut self, value: Component, offset: i128) {
        self.total += offset + Component::enum_to_int(value);
        self.calls += 1;
    }
}

#[test]
fn for_each() {
    let mut total = 0;
    let mut add = Component::for_each(|value| total += Component::enum_to_int(value));
    add(Component::Fragment);
    assert_eq!(total, 74);

    let mut acc = Accumulator { total: 0, calls: 0 };
    let mut process = Component::for_each_with(&mut acc, |acc, value| acc.process(value, 10));
    assert_eq!((acc.total, acc.calls), (160, 10));
    process(&mut acc, Component::Scheme);
    assert_eq!((acc.total, acc.calls), (170, 11));
}

#[test]
fn for_each_n() {
    let mut total = 0;
    let mut calls = 0;
    let mut add = Component::for_each_n(3, |value| {
        total += Component::enum_to_int(value);
        calls += 1;
    });
    add(Component::Path);
    assert_eq!((total, calls), (15, 4));

    let mut acc = Accumulator { total: 0, calls: 0 };
    let mut process = Component::for_each_n_with(3, &mut acc, |acc, value| acc.process(value, 10));
    assert_eq!((acc.total, acc.calls), (33, 3));
    process(&mut acc, Component::Fragment);
    assert_eq!((acc.total, acc.calls), (57, 4));

    let mut calls = 0;
    let mut count = Component::for_each_n(100, |_| calls += 1);
    count(Component::Host);
    assert_eq!(calls, Component::count() + 1);
}

#[test]
fn dispatch_by_value() {
    fn weight(value: Component) -> i128 {
        Component::enum_to_int(value) * 2
    }
    fn last(_: Component) -> i128 {
        -1
    }

    let table: [(Component, fn(Component) -> i128); 3] = [
        (Component::Scheme, weight),
        (Component::Path, weight),
        (Component::Fragment, last),
    ];
    assert_eq!(dispatch(Component::Path, 0, &table), 24);
    assert_eq!(dispatch(Component::Host, 0, &table), 0);
    assert_eq!(dispatch_or_last(Component::Scheme, &table), 0);
    assert_eq!(dispatch_or_last(Component::Host, &table), -1);

    let mut acc = Accumulator { total: 0, calls: 0 };
    let handlers: [(Component, fn(&mut Accumulator, Component)); 1] =
        [(Component::Query, |acc, value| acc.process(value, 1))];
    dispatch_with(Component::Query, (), &handlers, &mut acc);
    dispatch_with(Component::User, (), &handlers, &mut acc);
    assert_eq!((acc.total, acc.calls), (14, 1));
}

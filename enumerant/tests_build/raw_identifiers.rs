use enumerant::Enumerant;

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
#[enumerant(unscoped)]
enum Keyword {
    r#fn,
    r#match,
    #[enumerant(rename = "loop")]
    Repeat,
}

fn main() {
    assert_eq!(Keyword::names(), ["fn", "match", "loop"]);
    assert_eq!(Keyword::string_to_enum("loop"), Some(Keyword::Repeat));
}

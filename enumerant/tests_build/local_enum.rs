use enumerant::Enumerant;

fn main() {
    #[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
    #[repr(i8)]
    #[enumerant(min = -4, max = 4)]
    enum Tilt {
        #[enumerant(alias = LEAN_LEFT)]
        Left = -2,
        Level = 0,
        Right = 2,
    }

    assert_eq!(Tilt::LEAN_LEFT, Tilt::Left);
    assert_eq!(Tilt::int_to_enum(2), Some(Tilt::Right));
    assert_eq!(Tilt::enum_to_underlying(Tilt::Left), -2i8);
}

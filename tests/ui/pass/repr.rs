use enum_with_values::enum_with_values;

#[enum_with_values(Flag)]
#[derive(Default)]
#[repr(u64)]
enum FlagKind {
    #[default]
    #[value]
    None,
    #[value]
    Max = 18446744073709551615
}

#[enum_with_values(Signed)]
#[derive(Default)]
#[repr(i8)]
enum SignedKind {
    #[default]
    #[value(-1i8)]
    Negative = -128,
    #[value(1i8)]
    Positive = 127
}

fn main() {
    assert_eq!(u64::from(Flag::None), 0);
    assert_eq!(u64::from(Flag::Max), u64::MAX);
    assert_eq!(Flag::from(u64::MAX), Flag::Max);

    assert_eq!(i8::from(Signed::Negative), -1);
    assert_eq!(Signed::from(1i8), Signed::Positive);
    assert_eq!(Signed::from(-128i8), Signed::default());
}

use enum_with_values::enum_with_values;

#[enum_with_values(Level, throw_on_cast_failure = true)]
#[repr(u8)]
enum LevelKind {
    #[value("low")]
    Low = 1,
    #[value("high")]
    High = 3,
    Unused
}

fn main() {
    assert_eq!(Level::try_from(3u8), Ok(Level::High));
    assert_eq!(Level::try_from(4u8), Err(4));
    assert_eq!(Level::try_from("low"), Ok(Level::Low));
    assert_eq!(Level::High.to_string(), "high");
    assert_eq!(<&str>::try_from(Level::Low), Ok("low"));
    assert!(matches!(Level::try_from(LevelKind::Unused), Err(LevelKind::Unused)));
}

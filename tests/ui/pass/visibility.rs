mod protocol {
    use enum_with_values::enum_with_values;

    #[enum_with_values(Method)]
    #[derive(Default)]
    pub enum MethodKind {
        #[default]
        #[value("GET")]
        Get,
        #[value("POST")]
        Post
    }

    #[enum_with_values(Internal)]
    #[derive(Default)]
    pub(crate) enum InternalKind {
        #[default]
        #[value(1u8)]
        One
    }
}

fn main() {
    let method = protocol::Method::from("POST");
    assert_eq!(method, protocol::Method::Post);
    assert!(matches!(method.as_enum(), protocol::MethodKind::Post));
    assert!(matches!(protocol::MethodOrdinals::Get, protocol::MethodKind::Get));

    assert_eq!(u8::from(protocol::Internal::One), 1);
}

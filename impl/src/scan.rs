//! Contains the scanner which finds the annotated enumerations of a file.

use crate::host::Host;
use crate::schema::WrapperArgs;

/// An enumeration carrying the wrapper attribute.
pub struct Scanned<'a> {
    /// Path of the enumeration inside of the file, e.g. `a::b::Enum`.
    pub full_name: String,
    pub item: &'a syn::ItemEnum,
    /// Malformed arguments are reported per declaration by the generator.
    pub args: syn::Result<WrapperArgs>
}

struct Scanner<'a, 'h, H: Host + ?Sized> {
    host: &'h H,
    path: Vec<String>,
    found: Vec<Scanned<'a>>
}

impl<'a, H: Host + ?Sized> syn::visit::Visit<'a> for Scanner<'a, '_, H> {
    fn visit_item_mod(&mut self, item: &'a syn::ItemMod) {
        self.path.push(item.ident.to_string());
        syn::visit::visit_item_mod(self, item);
        self.path.pop();
    }

    fn visit_item_enum(&mut self, item: &'a syn::ItemEnum) {
        let args = match self.host.wrapper_args(item) {
            Some(args) => args,
            None => return
        };

        let full_name = self.path.iter()
            .map(String::as_str)
            .chain(core::iter::once(item.ident.to_string().as_str()))
            .collect::<Vec<_>>()
            .join("::");

        tracing::debug!(declaration = %full_name, "found annotated enumeration");

        self.found.push(Scanned { full_name, item, args });
    }

    // Items inside of function bodies have no path.
    fn visit_block(&mut self, _: &'a syn::Block) {}
}

/// Returns the annotated enumerations of a file in source order, including those of inline
/// modules.
pub fn scan<'a, H: Host + ?Sized>(host: &H, file: &'a syn::File) -> Vec<Scanned<'a>> {
    let mut scanner = Scanner { host, path: Vec::new(), found: Vec::new() };
    syn::visit::Visit::visit_file(&mut scanner, file);
    scanner.found
}

#[cfg(test)]
mod tests {
    use crate::host::SynHost;

    fn names(source: &str) -> Vec<String> {
        let file = syn::parse_file(source).unwrap();
        super::scan(&SynHost::default(), &file).into_iter().map(|scanned| scanned.full_name).collect()
    }

    #[test]
    fn filter() {
        assert!(names("").is_empty());
        assert!(names("enum A { B } struct C; fn d() {}").is_empty());
        assert_eq!(names("enum A { B } #[enum_with_values(W)] enum C { D }"), ["C"]);
        assert_eq!(
            names("#[enum_with_values::enum_with_values(W)] enum C { D }"),
            ["C"]
        );
    }

    #[test]
    fn modules() {
        assert_eq!(names("
            #[enum_with_values(W)] enum A { B }

            mod a {
                #[enum_with_values(W)] pub enum A { B }

                pub mod b {
                    #[enum_with_values(W)] pub enum C { D }
                }
            }

            mod c;

            #[enum_with_values(X)] enum E { F }
        "), ["A", "a::A", "a::b::C", "E"]);
    }

    #[test]
    fn function_bodies() {
        assert!(names("fn a() { #[enum_with_values(W)] enum A { B } }").is_empty());
    }

    #[test]
    fn malformed_args() {
        let file = syn::parse_file("#[enum_with_values] enum A { B } #[enum_with_values(W)] enum C { D }").unwrap();
        let scanned = super::scan(&SynHost::default(), &file);

        assert_eq!(scanned.len(), 2);
        assert!(scanned[0].args.is_err());
        assert_eq!(scanned[1].args.as_ref().unwrap().name, "W");
        assert_eq!(scanned[1].item.ident, "C");
    }
}

//! Contains code to generate the wrapper of an enumeration.

use crate::literal::LiteralType;

/// The other side of a pair of conversions.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Slot {
    /// The primitive type of the enumeration.
    Ordinal,
    /// The enumeration itself.
    Enum,
    /// The value at a position of the value tuples.
    Value(usize, LiteralType)
}

impl super::EnumDeclaration {
    fn ordinals_ident(&self) -> syn::Ident {
        quote::format_ident!("{}Ordinals", self.wrapper)
    }

    /// Returns the conversion slots in generation order.
    ///
    /// A type is converted at most once: value slots take precedence over the ordinal slot, and
    /// the first value slot of a type wins.
    fn slots(&self) -> Vec<Slot> {
        let mut types = Vec::new();
        let mut values = Vec::new();

        for (index, ty) in self.types.iter().flatten().enumerate() {
            let name = ty.to_string();
            if types.contains(&name) { continue; }

            types.push(name);
            values.push(Slot::Value(index, *ty));
        }

        let mut slots = Vec::with_capacity(values.len() + 2);

        if self.convert_ordinal && !types.contains(&self.repr.to_string()) {
            slots.push(Slot::Ordinal);
        }

        slots.push(Slot::Enum);
        slots.extend(values);
        slots
    }

    /// Generates `From` or `TryFrom` implementations in both directions.
    ///
    /// `outgoing` contains the enumeration patterns and the values they convert to, `incoming`
    /// the value patterns and the associated constants they convert to.
    fn generate_conversion(
        &self,
        generics: proc_macro2::TokenStream,
        output: proc_macro2::TokenStream,
        input: proc_macro2::TokenStream,
        outgoing: Vec<(proc_macro2::TokenStream, proc_macro2::TokenStream)>,
        incoming: Vec<(proc_macro2::TokenStream, &syn::Ident)>
    ) -> proc_macro2::TokenStream {
        let wrapper = &self.wrapper;
        let (outgoing_patterns, outgoing_values): (Vec<_>, Vec<_>) = outgoing.into_iter().unzip();
        let (incoming_patterns, incoming_members): (Vec<_>, Vec<_>) = incoming.into_iter().unzip();

        if self.throw_on_cast_failure {
            quote::quote! {
                impl core::convert::TryFrom<#wrapper> for #output {
                    type Error = #wrapper;

                    #[allow(unreachable_patterns)]
                    #[inline(always)]
                    fn try_from(value: #wrapper) -> core::result::Result<
                        Self, <Self as core::convert::TryFrom<#wrapper>>::Error
                    > {
                        match value.0 {
                            #(#outgoing_patterns => core::result::Result::Ok(#outgoing_values),)*
                            _ => core::result::Result::Err(value)
                        }
                    }
                }

                impl #generics core::convert::TryFrom<#input> for #wrapper {
                    type Error = #input;

                    #[allow(unreachable_patterns)]
                    #[inline(always)]
                    fn try_from(value: #input) -> core::result::Result<
                        Self, <Self as core::convert::TryFrom<#input>>::Error
                    > {
                        match value {
                            #(#incoming_patterns => core::result::Result::Ok(Self::#incoming_members),)*
                            _ => core::result::Result::Err(value)
                        }
                    }
                }
            }
        } else {
            quote::quote! {
                impl core::convert::From<#wrapper> for #output {
                    #[allow(unreachable_patterns)]
                    #[inline(always)]
                    fn from(value: #wrapper) -> Self {
                        match value.0 {
                            #(#outgoing_patterns => #outgoing_values,)*
                            _ => core::default::Default::default()
                        }
                    }
                }

                impl #generics core::convert::From<#input> for #wrapper {
                    #[allow(unreachable_patterns)]
                    #[inline(always)]
                    fn from(value: #input) -> Self {
                        match value {
                            #(#incoming_patterns => Self::#incoming_members,)*
                            _ => core::default::Default::default()
                        }
                    }
                }
            }
        }
    }

    /// Generates the conversions of all slots.
    fn generate_conversions(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let repr = &self.repr;

        let conversions = self.slots().into_iter().map(|slot| {
            let patterns = self.members.iter().map(|member| {
                let member = &member.ident;
                quote::quote!(#ident::#member)
            });

            match slot {
                Slot::Ordinal => {
                    let ordinals: Vec<_> = self.members.iter()
                        .map(|member| crate::primitive::ordinal_literal(member.ordinal, repr))
                        .collect();

                    self.generate_conversion(
                        quote::quote!(),
                        quote::quote!(#repr),
                        quote::quote!(#repr),
                        patterns.zip(ordinals.iter().cloned()).collect(),
                        ordinals.into_iter().zip(self.members.iter().map(|member| &member.ident)).collect()
                    )
                },

                Slot::Enum => self.generate_conversion(
                    quote::quote!(),
                    quote::quote!(#ident),
                    quote::quote!(#ident),
                    patterns.clone().zip(patterns.clone()).collect(),
                    patterns.zip(self.members.iter().map(|member| &member.ident)).collect()
                ),

                Slot::Value(index, ty) => {
                    let generics = if ty.is_borrowed() { quote::quote!(<'a>) } else { quote::quote!() };

                    self.generate_conversion(
                        generics,
                        ty.output_type(),
                        ty.input_type(),
                        patterns.zip(self.members.iter().map(|member| member.values[index].value())).collect(),
                        self.members.iter().map(|member| {
                            let pattern = member.values[index].pattern();

                            // Floats can not be compared in patterns.
                            (if ty.is_float() {
                                quote::quote!(__value if __value == #pattern)
                            } else {
                                pattern.clone()
                            }, &member.ident)
                        }).collect()
                    )
                }
            }
        });

        quote::quote! { #(#conversions)* }
    }

    /// Generates a `Default` implementation, the fallback of failed conversions.
    fn generate_default(&self) -> proc_macro2::TokenStream {
        if self.throw_on_cast_failure { return quote::quote!(); }

        let wrapper = &self.wrapper;

        quote::quote! {
            impl core::default::Default for #wrapper {
                #[inline(always)]
                fn default() -> Self {
                    Self(core::default::Default::default())
                }
            }
        }
    }

    /// Generates `Clone` and `Debug` implementations which cover every variant.
    fn generate_clone_debug(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let wrapper = &self.wrapper;
        let variants = &self.variants;
        let names = variants.iter().map(|variant| syn::LitStr::new(
            &format!("{}({}::{})", wrapper, ident, variant), variant.span()
        ));

        quote::quote! {
            impl core::clone::Clone for #wrapper {
                #[inline(always)]
                fn clone(&self) -> Self {
                    match self.0 {
                        #(#ident::#variants => Self(#ident::#variants)),*
                    }
                }
            }

            impl core::fmt::Debug for #wrapper {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(match self.0 {
                        #(#ident::#variants => #names),*
                    })
                }
            }
        }
    }

    /// Generates a `Display` implementation if the members carry a string.
    fn generate_display(&self) -> proc_macro2::TokenStream {
        if !self.types.iter().flatten().any(|ty| ty.is_str()) { return quote::quote!(); }

        let wrapper = &self.wrapper;

        let body = if self.throw_on_cast_failure {
            quote::quote! {
                match <&'static str as core::convert::TryFrom<#wrapper>>::try_from(
                    core::clone::Clone::clone(self)
                ) {
                    core::result::Result::Ok(value) => f.write_str(value),
                    core::result::Result::Err(_) => core::result::Result::Err(core::fmt::Error)
                }
            }
        } else {
            quote::quote! {
                f.write_str(<&'static str as core::convert::From<#wrapper>>::from(
                    core::clone::Clone::clone(self)
                ))
            }
        };

        quote::quote! {
            impl core::fmt::Display for #wrapper {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    #body
                }
            }
        }
    }

    /// Generates `PartialEq`, `Eq` and `Hash` implementations based on the wrapped variant.
    fn generate_equality(&self) -> proc_macro2::TokenStream {
        let wrapper = &self.wrapper;

        quote::quote! {
            impl core::cmp::PartialEq for #wrapper {
                #[inline(always)]
                fn eq(&self, other: &Self) -> bool {
                    core::mem::discriminant(&self.0) == core::mem::discriminant(&other.0)
                }
            }

            impl core::cmp::Eq for #wrapper {}

            impl core::hash::Hash for #wrapper {
                #[inline(always)]
                fn hash<__H: core::hash::Hasher>(&self, state: &mut __H) {
                    core::hash::Hash::hash(&core::mem::discriminant(&self.0), state)
                }
            }
        }
    }

    /// Generates the namespace of the ordinal constants.
    fn generate_ordinals(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let ident = &self.ident;
        let ordinals = self.ordinals_ident();
        let members = self.members.iter().map(|member| &member.ident);

        quote::quote! {
            #vis enum #ordinals {}

            #[allow(non_upper_case_globals)]
            impl #ordinals {
                #(#vis const #members: #ident = #ident::#members;)*
            }
        }
    }

    /// Generates the wrapper structure and its associated constants.
    fn generate_struct(&self) -> proc_macro2::TokenStream {
        let vis = &self.vis;
        let ident = &self.ident;
        let wrapper = &self.wrapper;
        let members = self.members.iter().map(|member| &member.ident);

        quote::quote! {
            #vis struct #wrapper(#ident);

            #[allow(non_upper_case_globals)]
            impl #wrapper {
                #(#vis const #members: Self = Self(#ident::#members);)*

                /// Returns the wrapped enumeration variant.
                #[inline(always)]
                #vis const fn as_enum(&self) -> &#ident {
                    &self.0
                }
            }
        }
    }
}

/// Generates the wrapper for the parsed enumeration.
impl core::convert::Into<proc_macro2::TokenStream> for super::EnumDeclaration {
    fn into(self) -> proc_macro2::TokenStream {
        let wrapper = self.generate_struct();
        let default = self.generate_default();
        let ordinals = self.generate_ordinals();
        let equality = self.generate_equality();
        let clone_debug = self.generate_clone_debug();
        let conversions = self.generate_conversions();
        let display = self.generate_display();

        quote::quote! {
            #wrapper
            #default
            #ordinals
            #equality
            #clone_debug
            #conversions
            #display
        }
    }
}

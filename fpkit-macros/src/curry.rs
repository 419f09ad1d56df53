//! Expansion of the `curry!` procedural macro.
//!
//! Two input forms are accepted:
//!
//! 1. A closure literal, whose parameter list declares the arity:
//!    `curry!(|a, b, c| body)`
//! 2. A function path followed by an explicit arity:
//!    `curry!(function_name, 3)`
//!
//! Both expand to a chain of `arity` single-argument closures. The callee and
//! every captured argument except the last live behind an `Rc`, so a curried
//! value and each partial application can be called any number of times.
//!
//! For `curry!(add, 2)` the expansion is:
//!
//! ```text
//! {
//!     let __fpkit_function = Rc::new(add);
//!     move |__fpkit_argument_0| {
//!         let __fpkit_function = Rc::clone(&__fpkit_function);
//!         let __fpkit_argument_0 = Rc::new(__fpkit_argument_0);
//!         move |__fpkit_argument_1| {
//!             __fpkit_function(
//!                 Rc::unwrap_or_clone(Rc::clone(&__fpkit_argument_0)),
//!                 __fpkit_argument_1,
//!             )
//!         }
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Lit, Token};

const MINIMUM_ARITY: usize = 2;

/// The callee of a `curry!` invocation together with its arity.
struct CurryTarget {
    callee: TokenStream2,
    arity: usize,
}

impl Parse for CurryTarget {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let callee: Expr = input.parse()?;

        if input.is_empty() {
            return match callee {
                Expr::Closure(closure) => {
                    let arity = closure.inputs.len();
                    check_arity(arity, closure.span())?;
                    Ok(Self {
                        callee: quote! { #closure },
                        arity,
                    })
                }
                Expr::Path(path) => Err(syn::Error::new(
                    path.span(),
                    "curry! with a function name requires an arity: curry!(function_name, 2)",
                )),
                other => Err(syn::Error::new(
                    other.span(),
                    "curry! expects a closure or a function name with an arity",
                )),
            };
        }

        input.parse::<Token![,]>()?;
        let arity_expression: Expr = input.parse()?;
        // trailing comma
        let _ = input.parse::<Option<Token![,]>>()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the arity"));
        }

        let Expr::Path(path) = callee else {
            return Err(syn::Error::new(
                callee.span(),
                "curry! expects a function name or path before the arity",
            ));
        };

        let arity = match arity_expression {
            Expr::Lit(ExprLit {
                lit: Lit::Int(literal),
                ..
            }) => literal.base10_parse::<usize>()?,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "curry! expects an integer literal for the arity",
                ));
            }
        };
        check_arity(arity, path.span())?;

        Ok(Self {
            callee: quote! { #path },
            arity,
        })
    }
}

fn check_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity < MINIMUM_ARITY {
        return Err(syn::Error::new(
            span,
            "curry! requires a function with at least 2 arguments",
        ));
    }
    Ok(())
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    match syn::parse::<CurryTarget>(input) {
        Ok(target) => expand(&target).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(target: &CurryTarget) -> TokenStream2 {
    let arguments: Vec<Ident> = (0..target.arity)
        .map(|index| format_ident!("__fpkit_argument_{}", index))
        .collect();
    let callee = &target.callee;
    let chain = closure_at(&arguments, 0);

    quote! {
        {
            let __fpkit_function = ::std::rc::Rc::new(#callee);
            #chain
        }
    }
}

/// Builds the closure accepting `arguments[position]` and everything nested
/// inside it.
fn closure_at(arguments: &[Ident], position: usize) -> TokenStream2 {
    let current = &arguments[position];

    if position + 1 == arguments.len() {
        let captured = arguments[..position].iter().map(|argument| {
            quote! { ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#argument)) }
        });
        return quote! {
            move |#current| __fpkit_function(#(#captured,)* #current)
        };
    }

    let previous = &arguments[..position];
    let inner = closure_at(arguments, position + 1);

    quote! {
        move |#current| {
            let __fpkit_function = ::std::rc::Rc::clone(&__fpkit_function);
            #(let #previous = ::std::rc::Rc::clone(&#previous);)*
            let #current = ::std::rc::Rc::new(#current);
            #inner
        }
    }
}

//! Procedural macros for `pal-logic`

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, LitInt, LitStr, Token};

/// A parsed `expr!` body, already lowered to `BoolExpr` method calls
struct Lowered(TokenStream2);

impl Parse for Lowered {
    fn parse(input: ParseStream) -> Result<Self> {
        let tokens = sum(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected token in boolean expression"));
        }
        Ok(Lowered(tokens))
    }
}

fn eat_or(input: ParseStream) -> Result<bool> {
    if input.peek(Token![+]) {
        input.parse::<Token![+]>()?;
        Ok(true)
    } else if input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

fn eat_and(input: ParseStream) -> Result<bool> {
    if input.peek(Token![*]) {
        input.parse::<Token![*]>()?;
        Ok(true)
    } else if input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

fn eat_not(input: ParseStream) -> Result<bool> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
    } else if input.peek(Token![/]) {
        input.parse::<Token![/]>()?;
    } else {
        return Ok(false);
    }
    Ok(true)
}

/// `product (('+' | '|') product)*`
fn sum(input: ParseStream) -> Result<TokenStream2> {
    let mut acc = product(input)?;
    while eat_or(input)? {
        let rhs = product(input)?;
        acc = quote! { (&(#acc)).or(&(#rhs)) };
    }
    Ok(acc)
}

/// `unary (('*' | '&') unary)*`
fn product(input: ParseStream) -> Result<TokenStream2> {
    let mut acc = unary(input)?;
    while eat_and(input)? {
        let rhs = unary(input)?;
        acc = quote! { (&(#acc)).and(&(#rhs)) };
    }
    Ok(acc)
}

/// `('!' | '~' | '/') unary | atom`
fn unary(input: ParseStream) -> Result<TokenStream2> {
    if eat_not(input)? {
        let inner = unary(input)?;
        Ok(quote! { (&(#inner)).not() })
    } else {
        atom(input)
    }
}

fn atom(input: ParseStream) -> Result<TokenStream2> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = sum(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected token in parentheses"));
        }
        Ok(inner)
    } else if input.peek(LitStr) {
        let name: LitStr = input.parse()?;
        Ok(quote! { ::pal_logic::BoolExpr::variable(#name) })
    } else if input.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        let value = match lit.base10_parse::<u8>()? {
            0 => false,
            1 => true,
            _ => {
                return Err(syn::Error::new(
                    lit.span(),
                    "only 0 and 1 are boolean constants",
                ))
            }
        };
        Ok(quote! { ::pal_logic::BoolExpr::constant(#value) })
    } else {
        let ident: Ident = input.parse()?;
        Ok(quote! { #ident })
    }
}

/// Build a `pal_logic::BoolExpr` with PAL-style operator syntax
///
/// - `a` is any `BoolExpr` binding in scope, used by reference
/// - `"a"` creates `BoolExpr::variable("a")`
/// - `0` and `1` are the constants
/// - `!a`, `~a` or `/a` negate
/// - `a * b` or `a & b` is AND, binding tighter than
/// - `a + b` or `a | b` which is OR
/// - parentheses group
///
/// ```ignore
/// use pal_logic::{expr, BoolExpr};
///
/// let q = BoolExpr::variable("Q");
/// let next = expr!(q * /"CLR" + "SET");
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let Lowered(tokens) = parse_macro_input!(input as Lowered);
    TokenStream::from(tokens)
}

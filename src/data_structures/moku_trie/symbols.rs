// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Conversions from caller-side word types into symbol sequences.

use std::iter::Cloned;
use std::slice;
use std::str::Chars;

/// Anything that can be walked as a word of `S` symbols.
///
/// String types yield their `char`s; slices, vectors and arrays yield their
/// elements.
pub trait IntoSymbols<S> {
    /// Iterator over the word's symbols.
    type Iter: Iterator<Item = S>;

    /// Returns the word's symbols in order.
    fn into_symbols(self) -> Self::Iter;
}

impl<'a> IntoSymbols<char> for &'a str {
    type Iter = Chars<'a>;

    fn into_symbols(self) -> Self::Iter {
        self.chars()
    }
}

impl<'a> IntoSymbols<char> for &'a String {
    type Iter = Chars<'a>;

    fn into_symbols(self) -> Self::Iter {
        self.chars()
    }
}

impl<'a, S: Clone> IntoSymbols<S> for &'a [S] {
    type Iter = Cloned<slice::Iter<'a, S>>;

    fn into_symbols(self) -> Self::Iter {
        self.iter().cloned()
    }
}

impl<'a, S: Clone> IntoSymbols<S> for &'a Vec<S> {
    type Iter = Cloned<slice::Iter<'a, S>>;

    fn into_symbols(self) -> Self::Iter {
        self.iter().cloned()
    }
}

impl<S, const N: usize> IntoSymbols<S> for [S; N] {
    type Iter = std::array::IntoIter<S, N>;

    fn into_symbols(self) -> Self::Iter {
        self.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_yields_chars() {
        let symbols: Vec<char> = "héllo".into_symbols().collect();
        assert_eq!(symbols, vec!['h', 'é', 'l', 'l', 'o']);
    }

    #[test]
    fn test_slice_and_array_yield_elements() {
        let bytes: &[u8] = b"ab";
        let from_slice: Vec<u8> = bytes.into_symbols().collect();
        assert_eq!(from_slice, vec![b'a', b'b']);

        let from_array: Vec<u32> = [3u32, 1, 4].into_symbols().collect();
        assert_eq!(from_array, vec![3, 1, 4]);
    }
}

//! Record comparison and sort permutations.
//!
//! Sorting never touches the source slice: it produces a permutation of
//! indices into it. The permutation is stable, so records that compare equal
//! keep their insertion order.
//!
//! # Ordering rules
//!
//! Before the direction multiplier is applied:
//! - absent values (missing path or explicit null) order before present values
//! - text vs text uses [`natural_cmp`]
//! - number vs number uses [`f64::total_cmp`], so `NaN` sorts after every number
//!   and `-0.0` before `0.0`
//! - `false < true`
//! - mixed kinds order by kind: bool < number < text
//!
//! The result is then multiplied by the [`SortOrder`] sign, so absent values
//! lead under ascending order and trail under descending order.

use crate::model::{FieldValue, Record, SortOrder, SortSpec};
use std::cmp::Ordering;

/// Compare two resolved field values under `order`.
///
/// [`SortOrder::Unsorted`] makes every pair equal.
pub fn compare_values(a: &FieldValue, b: &FieldValue, order: SortOrder) -> Ordering {
    let raw = compare_ascending(a, b);
    match order.sign() {
        1 => raw,
        -1 => raw.reverse(),
        _ => Ordering::Equal,
    }
}

fn compare_ascending(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => natural_cmp(x, y),
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Missing | FieldValue::Null => 0,
        FieldValue::Bool(_) => 1,
        FieldValue::Number(_) => 2,
        FieldValue::Text(_) => 3,
    }
}

/// Human-friendly string comparison.
///
/// Letters compare case-insensitively, runs of ASCII digits compare by
/// numeric value (`"item2" < "item10"`). Strings that are equal under those
/// rules fall back to a case-sensitive tiebreak where lowercase sorts first,
/// so distinct strings never compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let folded_a: String = a.chars().flat_map(char::to_lowercase).collect();
    let folded_b: String = b.chars().flat_map(char::to_lowercase).collect();

    let mut left = Tokens::new(&folded_a);
    let mut right = Tokens::new(&folded_b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = x.cmp(&y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }

    // Lowercase before uppercase: reversed code point order on ties.
    b.cmp(a)
}

/// A digit run or a single non-digit character.
#[derive(Debug)]
enum Token<'a> {
    Digits(&'a str),
    Char(char),
}

impl Token<'_> {
    fn rank(&self) -> u32 {
        match self {
            Token::Digits(_) => '0' as u32,
            Token::Char(c) => *c as u32,
        }
    }
}

impl Ord for Token<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Digits(x), Token::Digits(y)) => {
                let x = x.trim_start_matches('0');
                let y = y.trim_start_matches('0');
                x.len().cmp(&y.len()).then_with(|| x.cmp(y))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Token<'_> {}

impl PartialOrd for Token<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        if first.is_ascii_digit() {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (digits, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Token::Digits(digits))
        } else {
            self.rest = &self.rest[first.len_utf8()..];
            Some(Token::Char(first))
        }
    }
}

/// Order in which `records` appear after applying `sort`.
///
/// Returns the identity permutation when `sort` is inactive. Each field is
/// resolved once per record.
pub fn sort_permutation<R: Record>(records: &[R], sort: &SortSpec) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();

    let Some(field) = sort.field.as_ref().filter(|_| sort.is_active()) else {
        return order;
    };
    if records.is_empty() {
        return order;
    }

    let keys: Vec<FieldValue> = records.iter().map(|r| r.resolve(field)).collect();
    order.sort_by(|&i, &j| compare_values(&keys[i], &keys[j], sort.order));
    order
}

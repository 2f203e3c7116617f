//! Contains the unification of the value types of all members.

use crate::literal::LiteralType;

/// Returns the value types shared by all members position by position.
///
/// Enumerations without members unify to an empty list, any difference in arity or type yields
/// `None`.
pub(crate) fn unify(members: &[super::Member]) -> Option<Vec<LiteralType>> {
    let (first, others) = match members.split_first() {
        Some(split) => split,
        None => return Some(Vec::new())
    };

    let candidate: Vec<LiteralType> = first.values.iter().map(|value| value.ty).collect();

    others.iter().all(|member|
        member.values.len() == candidate.len() &&
        member.values.iter().zip(&candidate).all(|(value, ty)| value.ty == *ty)
    ).then_some(candidate)
}

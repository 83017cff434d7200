use itertools::Itertools;
use tracing::debug;

use crate::model::{MatchGroup, PartitionConstraint, QuerySpec, ScalarValue};

/// Joiner the engine expects between the members of a flattened composite
/// key. Collides if a real value contains the token; the downstream
/// comparison expression is built around it, so it stays as-is.
pub const COMPOSITE_JOINER: &str = "_S3F2COMP_";

/// Renders a scalar as SQL literal text. Strings are single-quoted with
/// embedded quotes doubled; that is the only transformation the target
/// dialect's parser needs, so control characters and backslashes pass
/// through untouched.
pub fn escape(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Null => "NULL".to_owned(),
        ScalarValue::Integer(i) => i.to_string(),
        ScalarValue::Float(f) => render_float(*f),
        ScalarValue::String(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

// Whole floats still render as floating literals: 2.0, not 2.
fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

/// Quotes a possibly dotted reference, one pair of double quotes per
/// segment: `a.b.c` becomes `"a"."b"."c"`.
fn quote_ident(reference: &str) -> String {
    reference
        .split('.')
        .map(|segment| format!("\"{}\"", segment))
        .join(".")
}

// Text form of a scalar inside a flattened composite key. The joined
// string is escaped once as a whole, so members appear unquoted here.
fn raw_text(value: &ScalarValue) -> String {
    match value {
        ScalarValue::String(s) => s.clone(),
        ScalarValue::Integer(i) => i.to_string(),
        ScalarValue::Float(f) => render_float(*f),
        ScalarValue::Null => "NULL".to_owned(),
    }
}

fn group_predicate(group: &MatchGroup) -> String {
    match group {
        MatchGroup::Simple { column, match_ids } => format!(
            "{} in ({})",
            quote_ident(column),
            match_ids.iter().map(escape).join(", ")
        ),
        MatchGroup::Composite { columns, match_ids } => {
            let entries = match_ids
                .iter()
                .map(|entry| {
                    let flattened = entry.iter().map(raw_text).join(COMPOSITE_JOINER);
                    escape(&ScalarValue::String(flattened))
                })
                .join(", ");
            let target = match columns.as_slice() {
                // A single column needs no concatenation, but its match
                // values still compare as strings.
                [column] => quote_ident(column),
                columns => {
                    let separator = format!(", '{}', ", COMPOSITE_JOINER);
                    format!(
                        "concat({})",
                        columns.iter().map(|c| quote_ident(c)).join(&separator)
                    )
                }
            };
            format!("{} in ({})", target, entries)
        }
    }
}

fn partition_predicate(constraint: &PartitionConstraint) -> String {
    format!(
        "{} = {}",
        quote_ident(&constraint.key),
        escape(&constraint.value)
    )
}

/// Produces the query selecting the distinct physical file locations of
/// every record matched by `spec`. Match group predicates are OR-joined
/// inside one pair of parentheses; partition constraints are ANDed on
/// after, in input order. Deterministic: structurally equal specs yield
/// byte-identical text.
///
/// Database and table names are quoted but embedded double quotes in them
/// are not escaped; catalog identifiers are caller-controlled, not
/// request input.
pub fn build_query(spec: &QuerySpec) -> String {
    let mut query = format!(
        "SELECT DISTINCT \"$path\" FROM \"{}\".\"{}\"",
        spec.database, spec.table
    );

    let mut predicates = Vec::with_capacity(spec.partition_constraints.len() + 1);
    if !spec.match_groups.is_empty() {
        predicates.push(format!(
            "({})",
            spec.match_groups.iter().map(group_predicate).join(" OR ")
        ));
    }
    predicates.extend(spec.partition_constraints.iter().map(partition_predicate));

    if !predicates.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&predicates.join(" AND "));
    }

    debug!(
        database = %spec.database,
        table = %spec.table,
        groups = spec.match_groups.len(),
        "built deletion query"
    );
    query
}

//! Text renderings of results and catalog metadata

use oeis_core::{SeqError, SequenceResult};
use oeis_plugin::{SequenceMeta, TermKind};

/// `n\ta(n)` header, then one line per term
pub fn table(result: &SequenceResult) -> String {
    let mut out = String::from("n\ta(n)\n");
    for (n, value) in result.indexed() {
        out.push_str(&format!("{}\t{}\n", n, value));
    }
    out
}

pub fn json(result: &SequenceResult) -> Result<String, SeqError> {
    serde_json::to_string_pretty(result).map_err(|e| SeqError::internal(e.to_string()))
}

/// One line per sequence: id, category, name
pub fn listing(metas: &[SequenceMeta]) -> String {
    metas
        .iter()
        .map(|m| format!("{}\t{}\t{}\n", m.id, m.category, m.name))
        .collect()
}

pub fn info(meta: &SequenceMeta) -> String {
    let kind = match meta.returns {
        TermKind::Machine => "machine integers",
        TermKind::Exact => "exact integers",
    };
    let mut out = format!("{}: {}\n", meta.id, meta.name);
    if !meta.description.is_empty() {
        out.push_str(&format!("  {}\n", meta.description));
    }
    out.push_str(&format!("  category: {}\n", meta.category));
    out.push_str(&format!("  returns:  {}\n", kind));
    for example in meta.examples {
        out.push_str(&format!("  example:  {}\n", example));
    }
    if !meta.related.is_empty() {
        out.push_str(&format!("  related:  {}\n", meta.related.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use oeis_core::Integer;

    fn meta() -> SequenceMeta {
        SequenceMeta {
            id: "A000045",
            name: "Fibonacci numbers",
            description: "F(n) = F(n-1) + F(n-2)",
            returns: TermKind::Exact,
            category: "named",
            examples: &["0, 1, 1, 2, 3"],
            related: &["A000032", "A000071"],
        }
    }

    #[test]
    fn test_table_starts_at_offset() {
        let result = SequenceResult::machine(vec![2, 3, 5], 1);
        assert_eq!(table(&result), "n\ta(n)\n1\t2\n2\t3\n3\t5\n");
        assert_eq!(table(&SequenceResult::machine(vec![], 0)), "n\ta(n)\n");
    }

    #[test]
    fn test_json_shape() {
        let result = SequenceResult::exact(vec![Integer::from_i64(7)], 0)
            .with_warning(SeqError::big_int("A000045", 93));
        let value: serde_json::Value = serde_json::from_str(&json(&result).unwrap()).unwrap();
        assert_eq!(value["offset"], 0);
        assert_eq!(value["terms"]["kind"], "exact");
        assert_eq!(value["terms"]["values"][0], "7");
        assert_eq!(value["warnings"][0]["code"], "BIG_INT");
    }

    #[test]
    fn test_listing() {
        assert_eq!(listing(&[meta()]), "A000045\tnamed\tFibonacci numbers\n");
        assert_eq!(listing(&[]), "");
    }

    #[test]
    fn test_info() {
        let text = info(&meta());
        assert!(text.starts_with("A000045: Fibonacci numbers\n"));
        assert!(text.contains("returns:  exact integers"));
        assert!(text.contains("related:  A000032, A000071"));
    }
}

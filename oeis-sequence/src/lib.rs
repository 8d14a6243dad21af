//! OEIS Sequence Library
//!
//! Combinatorial primitives, primality, sequence scaffolding and the formula
//! catalog. Formulas never panic; failures come back as `SeqError`.

pub mod helpers;
pub mod combinatorics;
pub mod primality;
pub mod scaffold;
mod named;
mod recurrence;
mod analytic;
mod counting;

use oeis_plugin::SequenceRegistry;

/// Load every catalog formula into the registry
pub fn load_sequence_library(registry: SequenceRegistry) -> SequenceRegistry {
    registry
        // Named and basic
        .with_sequence(named::Kolakoski)
        .with_sequence(named::Zeros)
        .with_sequence(named::ZeroPower)
        .with_sequence(named::Ones)
        .with_sequence(named::Naturals)
        .with_sequence(named::LeadingDigit)
        .with_sequence(named::OneTwo)
        .with_sequence(named::Parity)
        .with_sequence(named::Primes)
        .with_sequence(named::Repunits)
        .with_sequence(named::Fibonacci)
        .with_sequence(named::FibonacciMinusOne)
        .with_sequence(named::PowersOfTwo)
        .with_sequence(named::Catalan)
        .with_sequence(named::Bell)
        .with_sequence(named::Factorials)
        .with_sequence(named::DoubleFactorialEven)
        .with_sequence(named::Derangements)
        .with_sequence(named::LabeledRootedTrees)
        .with_sequence(named::Franel)
        .with_sequence(named::Superfactorials)
        .with_sequence(named::FactorialOfFactorial)
        .with_sequence(named::Arrangements)
        .with_sequence(named::BernoulliNumerators)
        .with_sequence(named::BernoulliDenominators)
        .with_sequence(named::InverseBinomialShift)

        // Recurrences
        .with_sequence(recurrence::Lucas)
        .with_sequence(recurrence::DyingRabbits)
        .with_sequence(recurrence::Sylvester)
        .with_sequence(recurrence::Tribonacci)
        .with_sequence(recurrence::Tetranacci)
        .with_sequence(recurrence::BinaryPartitions)
        .with_sequence(recurrence::DoublingRecurrence)
        .with_sequence(recurrence::Pell)
        .with_sequence(recurrence::ShiftedFactorialRecurrence)
        .with_sequence(recurrence::Menage)
        .with_sequence(recurrence::TribonacciOnes)
        .with_sequence(recurrence::TetranacciOnes)
        .with_sequence(recurrence::TwoToFibonacci)
        .with_sequence(recurrence::AlternatingFactorialRecurrence)

        // Real constants
        .with_sequence(analytic::NonSquares)
        .with_sequence(analytic::EMinusTwoBeatty)
        .with_sequence(analytic::ChangeWithFives)
        .with_sequence(analytic::RootedMaps)
        .with_sequence(analytic::FloorPowersOfE)
        .with_sequence(analytic::Tangent)
        .with_sequence(analytic::NearestRoot)
        .with_sequence(analytic::IntegerRoot)
        .with_sequence(analytic::LowerWythoff)
        .with_sequence(analytic::GoldenRatioDigits)

        // Counting and primes
        .with_sequence(counting::DivisorCount)
        .with_sequence(counting::PrimeRoots)
        .with_sequence(counting::MakingChange)
        .with_sequence(counting::Totient)
        .with_sequence(counting::NextPrimePower)
        .with_sequence(counting::Partitions)
        .with_sequence(counting::MersenneExponents)
        .with_sequence(counting::SumsOfTwoSquares)
        .with_sequence(counting::MakingChangeSums)
        .with_sequence(counting::PartitionsMinusOne)
        .with_sequence(counting::QuarticPrimes)
        .with_sequence(counting::PartitionSums)
        .with_sequence(counting::FourSquares)
        .with_sequence(counting::TwoSquareWays)
        .with_sequence(counting::ThreeSquareWays)
        .with_sequence(counting::DivisorSum)
        .with_sequence(counting::SquarePlusThreeSquares)
        .with_sequence(counting::StirlingFirstColumn)
        .with_sequence(counting::StirlingSecondColumn)
        .with_sequence(counting::AliquotSum)
        .with_sequence(counting::SquareDivisorSum)
        .with_sequence(counting::SquaredDigitSum)
        .with_sequence(counting::Radical)
        .with_sequence(counting::PrimeGaps)
        .with_sequence(counting::RecordGapEnds)
        .with_sequence(counting::RecordGapStarts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oeis_core::{codes, Terms};
    use oeis_plugin::TermKind;

    fn library() -> SequenceRegistry {
        load_sequence_library(SequenceRegistry::new())
    }

    #[test]
    fn test_every_formula_honours_its_metadata() {
        let reg = library();
        for meta in reg.list(None) {
            let result = match reg.compute(meta.id, 5) {
                Ok(r) => r,
                Err(e) => panic!("{} failed: {}", meta.id, e),
            };
            assert_eq!(result.len(), 5, "{}", meta.id);
            let kind_matches = matches!(
                (&result.terms, meta.returns),
                (Terms::Machine(_), TermKind::Machine) | (Terms::Exact(_), TermKind::Exact)
            );
            assert!(kind_matches, "{} returned {}", meta.id, result.terms.type_name());
            assert!(result.warnings.iter().all(|w| w.is_warning()), "{}", meta.id);
        }
    }

    #[test]
    fn test_zero_terms() {
        let reg = library();
        for meta in reg.list(None) {
            match reg.compute(meta.id, 0) {
                Ok(r) => assert!(r.is_empty(), "{}", meta.id),
                Err(e) => assert_eq!(e.code, codes::TOO_SMALL, "{}", meta.id),
            }
        }
    }

    #[test]
    fn test_examples_match_computed_prefix() {
        let reg = library();
        for meta in reg.list(None) {
            let Some(example) = meta.examples.first() else { continue };
            let expected: Vec<&str> = example.split(", ").collect();
            let result = reg.compute(meta.id, expected.len() as i64).unwrap();
            assert_eq!(result.terms.to_strings(), expected, "{}", meta.id);
        }
    }

    #[test]
    fn test_catalan_end_to_end() {
        let result = library().compute("a000108", 10).unwrap();
        assert_eq!(result.offset, 0);
        assert_eq!(
            result.terms.to_strings(),
            vec!["1", "1", "2", "5", "14", "42", "132", "429", "1430", "4862"]
        );
    }

    #[test]
    fn test_bell_end_to_end() {
        let result = library().compute("A000110", 5).unwrap();
        assert_eq!(result.terms.to_strings(), vec!["1", "1", "2", "5", "15"]);
    }

    #[test]
    fn test_errors_name_the_sequence() {
        let err = library().compute("A000032", 200).unwrap_err();
        assert_eq!(err.code, codes::OVERFLOW);
        assert_eq!(err.context.unwrap().sequence.as_deref(), Some("A000032"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            library().categories(),
            vec!["analytic", "counting", "named", "primes", "recurrence"]
        );
    }
}

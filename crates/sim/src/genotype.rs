use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{InvalidGenotype, InvalidMatingSelection};

/// A diploid genotype at a biallelic locus.
///
/// `Genotype` is a compact, Copyable representation of the three genotypes
/// backed by a single byte (u8). The mapping of variants to integers is
/// stable and defines the axis order of every frequency vector and
/// transition matrix in the crate (Dom=0, Het=1, Rec=2, i.e. AA, Aa, aa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Genotype {
    /// Homozygous dominant, "AA"
    Dom = 0,
    /// Heterozygous, "Aa"
    Het = 1,
    /// Homozygous recessive, "aa"
    Rec = 2,
}

impl Genotype {
    /// All genotypes in canonical axis order.
    pub const ALL: [Self; 3] = [Self::Dom, Self::Het, Self::Rec];

    /// Convert from u8 index (0-2)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Dom),
            1 => Some(Self::Het),
            2 => Some(Self::Rec),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-2).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Two-letter allele label ("AA", "Aa" or "aa").
    #[inline(always)]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dom => "AA",
            Self::Het => "Aa",
            Self::Rec => "aa",
        }
    }

    /// Parse a two-letter allele label. Letter case is significant ("AA" and
    /// "aa" are different genotypes); "aA" is accepted as heterozygous.
    #[inline]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "AA" => Some(Self::Dom),
            "Aa" | "aA" => Some(Self::Het),
            "aa" => Some(Self::Rec),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Genotype {
    type Error = InvalidGenotype;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Self::from_index(idx).ok_or(InvalidGenotype(idx))
    }
}

impl From<Genotype> for u8 {
    #[inline(always)]
    fn from(genotype: Genotype) -> u8 {
        genotype.to_index()
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the six canonical mating pairs.
///
/// A `MatingSelection` picks the pair of parent genotypes whose offspring
/// distribution fills one column of a transition matrix. The six variants
/// are exactly the unordered pairs of the three genotypes, numbered in the
/// order they are traditionally presented (1 = AA×AA .. 6 = AA×aa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MatingSelection {
    /// AA × AA: all offspring AA
    DomDom = 0,
    /// Aa × Aa: offspring 1/4 AA, 1/2 Aa, 1/4 aa
    HetHet = 1,
    /// aa × aa: all offspring aa
    RecRec = 2,
    /// Aa × AA: offspring 1/2 AA, 1/2 Aa
    HetDom = 3,
    /// Aa × aa: all offspring Aa
    HetRec = 4,
    /// AA × aa: offspring 1/2 Aa, 1/2 aa
    DomRec = 5,
}

impl MatingSelection {
    /// All selections in menu order.
    pub const ALL: [Self; 6] = [
        Self::DomDom,
        Self::HetHet,
        Self::RecRec,
        Self::HetDom,
        Self::HetRec,
        Self::DomRec,
    ];

    /// Convert from u8 index (0-5)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::DomDom),
            1 => Some(Self::HetHet),
            2 => Some(Self::RecRec),
            3 => Some(Self::HetDom),
            4 => Some(Self::HetRec),
            5 => Some(Self::DomRec),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-5).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from the 1-based menu number (1-6).
    #[inline]
    pub const fn from_menu_number(number: u8) -> Option<Self> {
        match number {
            0 => None,
            n => Self::from_index(n - 1),
        }
    }

    /// The 1-based menu number (1-6).
    #[inline(always)]
    pub const fn menu_number(self) -> u8 {
        self.to_index() + 1
    }

    /// The two parent genotypes of this pair.
    #[inline]
    pub const fn parents(self) -> (Genotype, Genotype) {
        match self {
            Self::DomDom => (Genotype::Dom, Genotype::Dom),
            Self::HetHet => (Genotype::Het, Genotype::Het),
            Self::RecRec => (Genotype::Rec, Genotype::Rec),
            Self::HetDom => (Genotype::Het, Genotype::Dom),
            Self::HetRec => (Genotype::Het, Genotype::Rec),
            Self::DomRec => (Genotype::Dom, Genotype::Rec),
        }
    }

    /// The selection for an unordered pair of parent genotypes. Total: every
    /// ordered pair maps to one of the six variants.
    #[inline]
    pub const fn from_parents(a: Genotype, b: Genotype) -> Self {
        use Genotype::{Dom, Het, Rec};
        match (a, b) {
            (Dom, Dom) => Self::DomDom,
            (Het, Het) => Self::HetHet,
            (Rec, Rec) => Self::RecRec,
            (Het, Dom) | (Dom, Het) => Self::HetDom,
            (Het, Rec) | (Rec, Het) => Self::HetRec,
            (Dom, Rec) | (Rec, Dom) => Self::DomRec,
        }
    }

    /// Mendelian offspring fractions (AA, Aa, aa) for this pair.
    ///
    /// These are fixed constants, never recomputed; each array sums to
    /// exactly 1.0, which is what makes transition matrices
    /// column-stochastic by construction.
    #[inline]
    pub const fn offspring_distribution(self) -> [f64; 3] {
        match self {
            Self::DomDom => [1.0, 0.0, 0.0],
            Self::HetHet => [0.25, 0.5, 0.25],
            Self::RecRec => [0.0, 0.0, 1.0],
            Self::HetDom => [0.5, 0.5, 0.0],
            Self::HetRec => [0.0, 1.0, 0.0],
            Self::DomRec => [0.0, 0.5, 0.5],
        }
    }

    /// Pair label such as "Aa×AA".
    #[inline(always)]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DomDom => "AA×AA",
            Self::HetHet => "Aa×Aa",
            Self::RecRec => "aa×aa",
            Self::HetDom => "Aa×AA",
            Self::HetRec => "Aa×aa",
            Self::DomRec => "AA×aa",
        }
    }
}

impl FromStr for MatingSelection {
    type Err = InvalidMatingSelection;

    /// Accepts the 1-based menu number ("1".."6") or a pair label with `x`,
    /// `×` or `,` between the genotype labels, in either parent order
    /// ("AAxAa" and "AaxAA" are the same selection).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(number) = token.parse::<u8>() {
            return Self::from_menu_number(number)
                .ok_or_else(|| InvalidMatingSelection(s.to_string()));
        }
        let mut parts = token.split(['x', '×', ',']).map(str::trim);
        if let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) {
            if let (Some(a), Some(b)) = (Genotype::from_label(left), Genotype::from_label(right)) {
                return Ok(Self::from_parents(a, b));
            }
        }
        Err(InvalidMatingSelection(s.to_string()))
    }
}

impl fmt::Display for MatingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Genotype Tests =====

    #[test]
    fn test_genotype_from_index() {
        assert_eq!(Genotype::from_index(0), Some(Genotype::Dom));
        assert_eq!(Genotype::from_index(1), Some(Genotype::Het));
        assert_eq!(Genotype::from_index(2), Some(Genotype::Rec));
        assert_eq!(Genotype::from_index(3), None);
        assert_eq!(Genotype::from_index(255), None);
    }

    #[test]
    fn test_genotype_to_index() {
        assert_eq!(Genotype::Dom.to_index(), 0);
        assert_eq!(Genotype::Het.to_index(), 1);
        assert_eq!(Genotype::Rec.to_index(), 2);
    }

    #[test]
    fn test_genotype_labels() {
        assert_eq!(Genotype::Dom.label(), "AA");
        assert_eq!(Genotype::Het.label(), "Aa");
        assert_eq!(Genotype::Rec.label(), "aa");

        assert_eq!(Genotype::from_label("AA"), Some(Genotype::Dom));
        assert_eq!(Genotype::from_label("Aa"), Some(Genotype::Het));
        assert_eq!(Genotype::from_label("aA"), Some(Genotype::Het));
        assert_eq!(Genotype::from_label("aa"), Some(Genotype::Rec));
        assert_eq!(Genotype::from_label("AB"), None);
        assert_eq!(Genotype::from_label(""), None);
    }

    #[test]
    fn test_genotype_try_from_u8() {
        assert_eq!(Genotype::try_from(1), Ok(Genotype::Het));
        let err = Genotype::try_from(9).unwrap_err();
        assert_eq!(err.0, 9);
    }

    #[test]
    fn test_genotype_display() {
        assert_eq!(format!("{}", Genotype::Dom), "AA");
        assert_eq!(format!("{}", Genotype::Rec), "aa");
    }

    #[test]
    fn test_genotype_all_order() {
        for (i, genotype) in Genotype::ALL.iter().enumerate() {
            assert_eq!(genotype.to_index() as usize, i);
        }
    }

    // ===== MatingSelection Tests =====

    #[test]
    fn test_selection_index_round_trip() {
        for idx in 0..6u8 {
            let selection = MatingSelection::from_index(idx).unwrap();
            assert_eq!(selection.to_index(), idx);
        }
        assert_eq!(MatingSelection::from_index(6), None);
    }

    #[test]
    fn test_selection_menu_numbers() {
        assert_eq!(
            MatingSelection::from_menu_number(1),
            Some(MatingSelection::DomDom)
        );
        assert_eq!(
            MatingSelection::from_menu_number(2),
            Some(MatingSelection::HetHet)
        );
        assert_eq!(
            MatingSelection::from_menu_number(6),
            Some(MatingSelection::DomRec)
        );
        assert_eq!(MatingSelection::from_menu_number(0), None);
        assert_eq!(MatingSelection::from_menu_number(7), None);

        assert_eq!(MatingSelection::DomDom.menu_number(), 1);
        assert_eq!(MatingSelection::DomRec.menu_number(), 6);
    }

    #[test]
    fn test_selection_parents_round_trip() {
        for selection in MatingSelection::ALL {
            let (a, b) = selection.parents();
            assert_eq!(MatingSelection::from_parents(a, b), selection);
            // Parent order does not matter
            assert_eq!(MatingSelection::from_parents(b, a), selection);
        }
    }

    #[test]
    fn test_offspring_distributions() {
        assert_eq!(
            MatingSelection::DomDom.offspring_distribution(),
            [1.0, 0.0, 0.0]
        );
        assert_eq!(
            MatingSelection::HetHet.offspring_distribution(),
            [0.25, 0.5, 0.25]
        );
        assert_eq!(
            MatingSelection::RecRec.offspring_distribution(),
            [0.0, 0.0, 1.0]
        );
        assert_eq!(
            MatingSelection::HetDom.offspring_distribution(),
            [0.5, 0.5, 0.0]
        );
        assert_eq!(
            MatingSelection::HetRec.offspring_distribution(),
            [0.0, 1.0, 0.0]
        );
        assert_eq!(
            MatingSelection::DomRec.offspring_distribution(),
            [0.0, 0.5, 0.5]
        );
    }

    #[test]
    fn test_offspring_distributions_sum_to_one() {
        for selection in MatingSelection::ALL {
            let total: f64 = selection.offspring_distribution().iter().sum();
            assert_eq!(total, 1.0);
        }
    }

    #[test]
    fn test_selection_from_str_menu_numbers() {
        assert_eq!("1".parse::<MatingSelection>(), Ok(MatingSelection::DomDom));
        assert_eq!(" 4 ".parse::<MatingSelection>(), Ok(MatingSelection::HetDom));
        assert!("0".parse::<MatingSelection>().is_err());
        assert!("7".parse::<MatingSelection>().is_err());
    }

    #[test]
    fn test_selection_from_str_labels() {
        assert_eq!(
            "AAxAA".parse::<MatingSelection>(),
            Ok(MatingSelection::DomDom)
        );
        assert_eq!(
            "Aa×Aa".parse::<MatingSelection>(),
            Ok(MatingSelection::HetHet)
        );
        assert_eq!(
            "aa,aa".parse::<MatingSelection>(),
            Ok(MatingSelection::RecRec)
        );
        assert_eq!(
            "Aa, AA".parse::<MatingSelection>(),
            Ok(MatingSelection::HetDom)
        );
        // Either parent order
        assert_eq!(
            "AAxAa".parse::<MatingSelection>(),
            Ok(MatingSelection::HetDom)
        );
        assert_eq!(
            "aaxAa".parse::<MatingSelection>(),
            Ok(MatingSelection::HetRec)
        );
    }

    #[test]
    fn test_selection_from_str_rejects_garbage() {
        assert!("".parse::<MatingSelection>().is_err());
        assert!("AAxAB".parse::<MatingSelection>().is_err());
        assert!("AAxAAxAA".parse::<MatingSelection>().is_err());
        // Case matters for genotype labels
        assert!("AAXAA".parse::<MatingSelection>().is_err());

        let err = "bogus".parse::<MatingSelection>().unwrap_err();
        assert_eq!(err.0, "bogus");
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(format!("{}", MatingSelection::DomDom), "AA×AA");
        assert_eq!(format!("{}", MatingSelection::HetDom), "Aa×AA");
        assert_eq!(format!("{}", MatingSelection::DomRec), "AA×aa");
    }

    #[test]
    fn test_selection_serde_round_trip() {
        for selection in MatingSelection::ALL {
            let json = serde_json::to_string(&selection).unwrap();
            let back: MatingSelection = serde_json::from_str(&json).unwrap();
            assert_eq!(back, selection);
        }
    }

    #[test]
    fn test_selection_size() {
        assert_eq!(std::mem::size_of::<MatingSelection>(), 1);
        assert_eq!(std::mem::size_of::<Genotype>(), 1);
    }
}

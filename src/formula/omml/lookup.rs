use phf::phf_map;

/// OMML constructs the translator dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `acc`
    Accent,
    /// `bar`
    Bar,
    /// `box`, recognized but not translated
    Box,
    /// `d`
    Delimiter,
    /// `sPre`, recognized but not translated
    PreScript,
    /// `sSub`
    Subscript,
    /// `sSup`
    Superscript,
    /// `sSubSup`
    SubSup,
    /// `sub`
    SubscriptElement,
    /// `sup`
    SuperscriptElement,
    /// `f`
    Fraction,
    /// `num`
    Numerator,
    /// `den`
    Denominator,
    /// `func`
    Function,
    /// `fName`
    FunctionName,
    /// `groupChr`
    GroupChar,
    /// `e`
    Base,
    /// `r`
    Run,
}

/// Fast local name to tag lookup using PHF
pub static TAGS: phf::Map<&'static str, Tag> = phf_map! {
    "acc" => Tag::Accent,
    "bar" => Tag::Bar,
    "box" => Tag::Box,
    "d" => Tag::Delimiter,
    "sPre" => Tag::PreScript,
    "sSub" => Tag::Subscript,
    "sSup" => Tag::Superscript,
    "sSubSup" => Tag::SubSup,
    "sub" => Tag::SubscriptElement,
    "sup" => Tag::SuperscriptElement,
    "f" => Tag::Fraction,
    "num" => Tag::Numerator,
    "den" => Tag::Denominator,
    "func" => Tag::Function,
    "fName" => Tag::FunctionName,
    "groupChr" => Tag::GroupChar,
    "e" => Tag::Base,
    "r" => Tag::Run,
};

impl Tag {
    /// Look up the tag for an OMML local name.
    #[inline]
    pub fn from_local_name(name: &str) -> Option<Tag> {
        TAGS.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_tags() {
        assert_eq!(Tag::from_local_name("f"), Some(Tag::Fraction));
        assert_eq!(Tag::from_local_name("sSubSup"), Some(Tag::SubSup));
        assert_eq!(Tag::from_local_name("groupChr"), Some(Tag::GroupChar));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Tag::from_local_name("F"), None);
        assert_eq!(Tag::from_local_name("ssub"), None);
        assert_eq!(Tag::from_local_name("rad"), None);
    }
}

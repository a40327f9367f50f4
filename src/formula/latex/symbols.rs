// Static LaTeX lookup tables
//
// Default data for the OMML translator: accent and grouping characters,
// bar positions, fraction types, function names and the symbol substitution
// table applied to text runs. Templates use the placeholder syntax of
// `templates::render_template`.

use phf::phf_map;

/// Accent template used when `accPr/chr` is absent.
pub const ACCENT_DEFAULT: &str = "\\hat{{{text}}}";

/// Bar template used when `barPr/pos` is absent.
pub const POSITION_DEFAULT: &str = "\\overline{{{text}}}";

/// Fraction template used when `fPr/type` is absent or unknown.
pub const FRACTION_DEFAULT: &str = "\\frac{{{num}}}{{{den}}}";

pub const SUBSCRIPT: &str = "_{{{text}}}";
pub const SUPERSCRIPT: &str = "^{{{text}}}";

/// Delimiter template with `left`, `text` and `right` placeholders.
pub const DELIMITER: &str = "\\left{left}{text}\\right{right}";
pub const DELIMITER_OPEN: &str = "(";
pub const DELIMITER_CLOSE: &str = ")";
pub const DELIMITER_SEPARATOR: &str = "|";
/// Invisible delimiter used for an explicitly empty `begChr`/`endChr`.
pub const DELIMITER_NULL: &str = ".";

/// Accent and grouping characters (combining marks, braces) to templates.
pub static ACCENTS: phf::Map<&'static str, &'static str> = phf_map! {
    // Top accents
    "\u{0300}" => "\\grave{{{text}}}",
    "\u{0301}" => "\\acute{{{text}}}",
    "\u{0302}" => "\\hat{{{text}}}",
    "\u{0303}" => "\\tilde{{{text}}}",
    "\u{0304}" => "\\bar{{{text}}}",
    "\u{0305}" => "\\overline{{{text}}}",
    "\u{0306}" => "\\breve{{{text}}}",
    "\u{0307}" => "\\dot{{{text}}}",
    "\u{0308}" => "\\ddot{{{text}}}",
    "\u{030A}" => "\\mathring{{{text}}}",
    "\u{030C}" => "\\check{{{text}}}",
    "\u{0338}" => "\\not{{{text}}}",
    "\u{20D6}" => "\\overleftarrow{{{text}}}",
    "\u{20D7}" => "\\vec{{{text}}}",
    "\u{20DB}" => "\\dddot{{{text}}}",
    "\u{20E1}" => "\\overleftrightarrow{{{text}}}",
    // Spacing variants some producers emit instead of combining marks
    "^" => "\\hat{{{text}}}",
    "~" => "\\tilde{{{text}}}",
    "\u{00AF}" => "\\bar{{{text}}}",
    "\u{02D9}" => "\\dot{{{text}}}",
    "\u{00A8}" => "\\ddot{{{text}}}",
    "\u{2192}" => "\\vec{{{text}}}",
    // Bottom accents
    "\u{0331}" => "\\underline{{{text}}}",
    "\u{20EE}" => "\\underleftarrow{{{text}}}",
    "\u{20EF}" => "\\underrightarrow{{{text}}}",
    // Over groups
    "\u{23B4}" => "\\overbracket{{{text}}}",
    "\u{23DC}" => "\\overparen{{{text}}}",
    "\u{23DE}" => "\\overbrace{{{text}}}",
    // Under groups
    "\u{23B5}" => "\\underbracket{{{text}}}",
    "\u{23DD}" => "\\underparen{{{text}}}",
    "\u{23DF}" => "\\underbrace{{{text}}}",
};

/// Bar placement (`barPr/pos`) to templates.
pub static POSITIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "top" => "\\overline{{{text}}}",
    "bot" => "\\underline{{{text}}}",
};

/// Fraction type (`fPr/type`) to templates.
pub static FRACTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "bar" => "\\frac{{{num}}}{{{den}}}",
    "skw" => "^{{{num}}}/_{{{den}}}",
    "noBar" => "\\genfrac{{}}{{}}{{0pt}}{{}}{{{num}}}{{{den}}}",
    "lin" => "{{{num}}}/{{{den}}}",
};

/// Recognized function names to templates.
pub static FUNCTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "sin" => "\\sin({text})",
    "cos" => "\\cos({text})",
    "tan" => "\\tan({text})",
    "cot" => "\\cot({text})",
    "sec" => "\\sec({text})",
    "csc" => "\\csc({text})",
    "arcsin" => "\\arcsin({text})",
    "arccos" => "\\arccos({text})",
    "arctan" => "\\arctan({text})",
    "arccot" => "\\operatorname{{arccot}}({text})",
    "sinh" => "\\sinh({text})",
    "cosh" => "\\cosh({text})",
    "tanh" => "\\tanh({text})",
    "coth" => "\\coth({text})",
    "log" => "\\log({text})",
    "ln" => "\\ln({text})",
    "lg" => "\\lg({text})",
    "exp" => "\\exp({text})",
    "det" => "\\det({text})",
};

/// Symbol substitutions applied character by character to text runs.
///
/// Command replacements end with a space so that a following letter does
/// not run into the command name.
pub static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Lowercase Greek
    "\u{03B1}" => "\\alpha ",
    "\u{03B2}" => "\\beta ",
    "\u{03B3}" => "\\gamma ",
    "\u{03B4}" => "\\delta ",
    "\u{03B5}" => "\\varepsilon ",
    "\u{03B6}" => "\\zeta ",
    "\u{03B7}" => "\\eta ",
    "\u{03B8}" => "\\theta ",
    "\u{03B9}" => "\\iota ",
    "\u{03BA}" => "\\kappa ",
    "\u{03BB}" => "\\lambda ",
    "\u{03BC}" => "\\mu ",
    "\u{03BD}" => "\\nu ",
    "\u{03BE}" => "\\xi ",
    "\u{03BF}" => "o",
    "\u{03C0}" => "\\pi ",
    "\u{03C1}" => "\\rho ",
    "\u{03C2}" => "\\varsigma ",
    "\u{03C3}" => "\\sigma ",
    "\u{03C4}" => "\\tau ",
    "\u{03C5}" => "\\upsilon ",
    "\u{03C6}" => "\\varphi ",
    "\u{03C7}" => "\\chi ",
    "\u{03C8}" => "\\psi ",
    "\u{03C9}" => "\\omega ",
    "\u{03D1}" => "\\vartheta ",
    "\u{03D5}" => "\\phi ",
    "\u{03D6}" => "\\varpi ",
    "\u{03F1}" => "\\varrho ",
    "\u{03F5}" => "\\epsilon ",
    // Uppercase Greek with distinct glyphs
    "\u{0393}" => "\\Gamma ",
    "\u{0394}" => "\\Delta ",
    "\u{0398}" => "\\Theta ",
    "\u{039B}" => "\\Lambda ",
    "\u{039E}" => "\\Xi ",
    "\u{03A0}" => "\\Pi ",
    "\u{03A3}" => "\\Sigma ",
    "\u{03A5}" => "\\Upsilon ",
    "\u{03A6}" => "\\Phi ",
    "\u{03A8}" => "\\Psi ",
    "\u{03A9}" => "\\Omega ",
    // Math italic Greek, as inserted by the Office equation editor
    "\u{1D6FC}" => "\\alpha ",
    "\u{1D6FD}" => "\\beta ",
    "\u{1D6FE}" => "\\gamma ",
    "\u{1D6FF}" => "\\delta ",
    "\u{1D700}" => "\\epsilon ",
    "\u{1D703}" => "\\theta ",
    "\u{1D706}" => "\\lambda ",
    "\u{1D707}" => "\\mu ",
    "\u{1D70B}" => "\\pi ",
    "\u{1D70E}" => "\\sigma ",
    "\u{1D711}" => "\\varphi ",
    "\u{1D714}" => "\\omega ",
    // Arrows
    "\u{2190}" => "\\leftarrow ",
    "\u{2192}" => "\\rightarrow ",
    "\u{2194}" => "\\leftrightarrow ",
    "\u{21D0}" => "\\Leftarrow ",
    "\u{21D2}" => "\\Rightarrow ",
    "\u{21D4}" => "\\Leftrightarrow ",
    "\u{21A6}" => "\\mapsto ",
    // Relations
    "\u{2264}" => "\\leq ",
    "\u{2265}" => "\\geq ",
    "\u{2260}" => "\\neq ",
    "\u{2248}" => "\\approx ",
    "\u{2261}" => "\\equiv ",
    "\u{223C}" => "\\sim ",
    "\u{2245}" => "\\cong ",
    "\u{221D}" => "\\propto ",
    "\u{226A}" => "\\ll ",
    "\u{226B}" => "\\gg ",
    // Operators
    "\u{00B1}" => "\\pm ",
    "\u{2213}" => "\\mp ",
    "\u{00D7}" => "\\times ",
    "\u{00F7}" => "\\div ",
    "\u{00B7}" => "\\cdot ",
    "\u{22C5}" => "\\cdot ",
    "\u{2218}" => "\\circ ",
    "\u{2217}" => "\\ast ",
    "\u{2212}" => "-",
    "\u{2211}" => "\\sum ",
    "\u{220F}" => "\\prod ",
    "\u{222B}" => "\\int ",
    "\u{222C}" => "\\iint ",
    "\u{222E}" => "\\oint ",
    "\u{221A}" => "\\surd ",
    // Sets and logic
    "\u{2208}" => "\\in ",
    "\u{2209}" => "\\notin ",
    "\u{220B}" => "\\ni ",
    "\u{2282}" => "\\subset ",
    "\u{2283}" => "\\supset ",
    "\u{2286}" => "\\subseteq ",
    "\u{2287}" => "\\supseteq ",
    "\u{222A}" => "\\cup ",
    "\u{2229}" => "\\cap ",
    "\u{2205}" => "\\emptyset ",
    "\u{2200}" => "\\forall ",
    "\u{2203}" => "\\exists ",
    "\u{00AC}" => "\\neg ",
    "\u{2227}" => "\\wedge ",
    "\u{2228}" => "\\vee ",
    // Miscellaneous
    "\u{221E}" => "\\infty ",
    "\u{2202}" => "\\partial ",
    "\u{2207}" => "\\nabla ",
    "\u{2026}" => "\\ldots ",
    "\u{22EF}" => "\\cdots ",
    "\u{2032}" => "'",
    "\u{210F}" => "\\hbar ",
    "\u{2113}" => "\\ell ",
    "\u{00B0}" => "^{\\circ}",
};

//! Named character reference dataset.
//!
//! Generated from the WHATWG named character reference list, keeping only the
//! names that expand to a single scalar value. Do not edit by hand.
//!
//! Each slice holds the names its tier adds on top of the previous one. Order
//! matters: when several names share a character, the first one listed is the
//! name used for escaping.

/// Markup-significant characters.
pub(crate) static RESTRICTED: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
];

/// Legacy names accepted without a terminating semicolon, plus `apos`.
pub(crate) static BASE: &[(&str, char)] = &[
    ("aacute", '\u{00E1}'),
    ("Aacute", '\u{00C1}'),
    ("acirc", '\u{00E2}'),
    ("Acirc", '\u{00C2}'),
    ("acute", '\u{00B4}'),
    ("aelig", '\u{00E6}'),
    ("AElig", '\u{00C6}'),
    ("agrave", '\u{00E0}'),
    ("Agrave", '\u{00C0}'),
    ("AMP", '&'),
    ("aring", '\u{00E5}'),
    ("Aring", '\u{00C5}'),
    ("atilde", '\u{00E3}'),
    ("Atilde", '\u{00C3}'),
    ("auml", '\u{00E4}'),
    ("Auml", '\u{00C4}'),
    ("brvbar", '\u{00A6}'),
    ("ccedil", '\u{00E7}'),
    ("Ccedil", '\u{00C7}'),
    ("cedil", '\u{00B8}'),
    ("cent", '\u{00A2}'),
    ("copy", '\u{00A9}'),
    ("COPY", '\u{00A9}'),
    ("curren", '\u{00A4}'),
    ("deg", '\u{00B0}'),
    ("divide", '\u{00F7}'),
    ("eacute", '\u{00E9}'),
    ("Eacute", '\u{00C9}'),
    ("ecirc", '\u{00EA}'),
    ("Ecirc", '\u{00CA}'),
    ("egrave", '\u{00E8}'),
    ("Egrave", '\u{00C8}'),
    ("eth", '\u{00F0}'),
    ("ETH", '\u{00D0}'),
    ("euml", '\u{00EB}'),
    ("Euml", '\u{00CB}'),
    ("frac12", '\u{00BD}'),
    ("frac14", '\u{00BC}'),
    ("frac34", '\u{00BE}'),
    ("GT", '>'),
    ("iacute", '\u{00ED}'),
    ("Iacute", '\u{00CD}'),
    ("icirc", '\u{00EE}'),
    ("Icirc", '\u{00CE}'),
    ("iexcl", '\u{00A1}'),
    ("igrave", '\u{00EC}'),
    ("Igrave", '\u{00CC}'),
    ("iquest", '\u{00BF}'),
    ("iuml", '\u{00EF}'),
    ("Iuml", '\u{00CF}'),
    ("laquo", '\u{00AB}'),
    ("LT", '<'),
    ("macr", '\u{00AF}'),
    ("micro", '\u{00B5}'),
    ("middot", '\u{00B7}'),
    ("nbsp", '\u{00A0}'),
    ("not", '\u{00AC}'),
    ("ntilde", '\u{00F1}'),
    ("Ntilde", '\u{00D1}'),
    ("oacute", '\u{00F3}'),
    ("Oacute", '\u{00D3}'),
    ("ocirc", '\u{00F4}'),
    ("Ocirc", '\u{00D4}'),
    ("ograve", '\u{00F2}'),
    ("Ograve", '\u{00D2}'),
    ("ordf", '\u{00AA}'),
    ("ordm", '\u{00BA}'),
    ("oslash", '\u{00F8}'),
    ("Oslash", '\u{00D8}'),
    ("otilde", '\u{00F5}'),
    ("Otilde", '\u{00D5}'),
    ("ouml", '\u{00F6}'),
    ("Ouml", '\u{00D6}'),
    ("para", '\u{00B6}'),
    ("plusmn", '\u{00B1}'),
    ("pound", '\u{00A3}'),
    ("QUOT", '"'),
    ("raquo", '\u{00BB}'),
    ("reg", '\u{00AE}'),
    ("REG", '\u{00AE}'),
    ("sect", '\u{00A7}'),
    ("shy", '\u{00AD}'),
    ("sup1", '\u{00B9}'),
    ("sup2", '\u{00B2}'),
    ("sup3", '\u{00B3}'),
    ("szlig", '\u{00DF}'),
    ("thorn", '\u{00FE}'),
    ("THORN", '\u{00DE}'),
    ("times", '\u{00D7}'),
    ("uacute", '\u{00FA}'),
    ("Uacute", '\u{00DA}'),
    ("ucirc", '\u{00FB}'),
    ("Ucirc", '\u{00DB}'),
    ("ugrave", '\u{00F9}'),
    ("Ugrave", '\u{00D9}'),
    ("uml", '\u{00A8}'),
    ("uuml", '\u{00FC}'),
    ("Uuml", '\u{00DC}'),
    ("yacute", '\u{00FD}'),
    ("Yacute", '\u{00DD}'),
    ("yen", '\u{00A5}'),
    ("yuml", '\u{00FF}'),
];

/// Every remaining single-character name.
pub(crate) static EXTENDED: &[(&str, char)] = &[
    ("alefsym", '\u{2135}'),
    ("alpha", '\u{03B1}'),
    ("Alpha", '\u{0391}'),
    ("and", '\u{2227}'),
    ("ang", '\u{2220}'),
    ("asymp", '\u{2248}'),
    ("bdquo", '\u{201E}'),
    ("beta", '\u{03B2}'),
    ("Beta", '\u{0392}'),
    ("bull", '\u{2022}'),
    ("cap", '\u{2229}'),
    ("chi", '\u{03C7}'),
    ("Chi", '\u{03A7}'),
    ("circ", '\u{02C6}'),
    ("clubs", '\u{2663}'),
    ("cong", '\u{2245}'),
    ("crarr", '\u{21B5}'),
    ("cup", '\u{222A}'),
    ("dagger", '\u{2020}'),
    ("Dagger", '\u{2021}'),
    ("darr", '\u{2193}'),
    ("dArr", '\u{21D3}'),
    ("delta", '\u{03B4}'),
    ("Delta", '\u{0394}'),
    ("diams", '\u{2666}'),
    ("empty", '\u{2205}'),
    ("emsp", '\u{2003}'),
    ("ensp", '\u{2002}'),
    ("epsilon", '\u{03B5}'),
    ("Epsilon", '\u{0395}'),
    ("equiv", '\u{2261}'),
    ("eta", '\u{03B7}'),
    ("Eta", '\u{0397}'),
    ("euro", '\u{20AC}'),
    ("exist", '\u{2203}'),
    ("fnof", '\u{0192}'),
    ("forall", '\u{2200}'),
    ("frasl", '\u{2044}'),
    ("gamma", '\u{03B3}'),
    ("Gamma", '\u{0393}'),
    ("ge", '\u{2265}'),
    ("harr", '\u{2194}'),
    ("hArr", '\u{21D4}'),
    ("hearts", '\u{2665}'),
    ("hellip", '\u{2026}'),
    ("image", '\u{2111}'),
    ("infin", '\u{221E}'),
    ("int", '\u{222B}'),
    ("iota", '\u{03B9}'),
    ("Iota", '\u{0399}'),
    ("isin", '\u{2208}'),
    ("kappa", '\u{03BA}'),
    ("Kappa", '\u{039A}'),
    ("lambda", '\u{03BB}'),
    ("Lambda", '\u{039B}'),
    ("lang", '\u{27E8}'),
    ("larr", '\u{2190}'),
    ("lArr", '\u{21D0}'),
    ("lceil", '\u{2308}'),
    ("ldquo", '\u{201C}'),
    ("le", '\u{2264}'),
    ("lfloor", '\u{230A}'),
    ("lowast", '\u{2217}'),
    ("loz", '\u{25CA}'),
    ("lrm", '\u{200E}'),
    ("lsaquo", '\u{2039}'),
    ("lsquo", '\u{2018}'),
    ("mdash", '\u{2014}'),
    ("minus", '\u{2212}'),
    ("mu", '\u{03BC}'),
    ("Mu", '\u{039C}'),
    ("nabla", '\u{2207}'),
    ("ndash", '\u{2013}'),
    ("ne", '\u{2260}'),
    ("ni", '\u{220B}'),
    ("notin", '\u{2209}'),
    ("nsub", '\u{2284}'),
    ("nu", '\u{03BD}'),
    ("Nu", '\u{039D}'),
    ("oelig", '\u{0153}'),
    ("OElig", '\u{0152}'),
    ("oline", '\u{203E}'),
    ("omega", '\u{03C9}'),
    ("Omega", '\u{03A9}'),
    ("omicron", '\u{03BF}'),
    ("Omicron", '\u{039F}'),
    ("oplus", '\u{2295}'),
    ("or", '\u{2228}'),
    ("otimes", '\u{2297}'),
    ("part", '\u{2202}'),
    ("permil", '\u{2030}'),
    ("perp", '\u{22A5}'),
    ("phi", '\u{03C6}'),
    ("Phi", '\u{03A6}'),
    ("pi", '\u{03C0}'),
    ("Pi", '\u{03A0}'),
    ("piv", '\u{03D6}'),
    ("prime", '\u{2032}'),
    ("Prime", '\u{2033}'),
    ("prod", '\u{220F}'),
    ("prop", '\u{221D}'),
    ("psi", '\u{03C8}'),
    ("Psi", '\u{03A8}'),
    ("radic", '\u{221A}'),
    ("rang", '\u{27E9}'),
    ("rarr", '\u{2192}'),
    ("rArr", '\u{21D2}'),
    ("rceil", '\u{2309}'),
    ("rdquo", '\u{201D}'),
    ("real", '\u{211C}'),
    ("rfloor", '\u{230B}'),
    ("rho", '\u{03C1}'),
    ("Rho", '\u{03A1}'),
    ("rlm", '\u{200F}'),
    ("rsaquo", '\u{203A}'),
    ("rsquo", '\u{2019}'),
    ("sbquo", '\u{201A}'),
    ("scaron", '\u{0161}'),
    ("Scaron", '\u{0160}'),
    ("sdot", '\u{22C5}'),
    ("sigma", '\u{03C3}'),
    ("Sigma", '\u{03A3}'),
    ("sigmaf", '\u{03C2}'),
    ("sim", '\u{223C}'),
    ("spades", '\u{2660}'),
    ("sub", '\u{2282}'),
    ("sube", '\u{2286}'),
    ("sum", '\u{2211}'),
    ("sup", '\u{2283}'),
    ("supe", '\u{2287}'),
    ("tau", '\u{03C4}'),
    ("Tau", '\u{03A4}'),
    ("there4", '\u{2234}'),
    ("theta", '\u{03B8}'),
    ("Theta", '\u{0398}'),
    ("thetasym", '\u{03D1}'),
    ("thinsp", '\u{2009}'),
    ("tilde", '\u{02DC}'),
    ("trade", '\u{2122}'),
    ("uarr", '\u{2191}'),
    ("uArr", '\u{21D1}'),
    ("upsih", '\u{03D2}'),
    ("upsilon", '\u{03C5}'),
    ("Upsilon", '\u{03A5}'),
    ("weierp", '\u{2118}'),
    ("xi", '\u{03BE}'),
    ("Xi", '\u{039E}'),
    ("Yuml", '\u{0178}'),
    ("zeta", '\u{03B6}'),
    ("Zeta", '\u{0396}'),
    ("zwj", '\u{200D}'),
    ("zwnj", '\u{200C}'),
    ("abreve", '\u{0103}'),
    ("Abreve", '\u{0102}'),
    ("ac", '\u{223E}'),
    ("acd", '\u{223F}'),
    ("acy", '\u{0430}'),
    ("Acy", '\u{0410}'),
    ("af", '\u{2061}'),
    ("afr", '\u{1D51E}'),
    ("Afr", '\u{1D504}'),
    ("aleph", '\u{2135}'),
    ("amacr", '\u{0101}'),
    ("Amacr", '\u{0100}'),
    ("amalg", '\u{2A3F}'),
    ("And", '\u{2A53}'),
    ("andand", '\u{2A55}'),
    ("andd", '\u{2A5C}'),
    ("andslope", '\u{2A58}'),
    ("andv", '\u{2A5A}'),
    ("ange", '\u{29A4}'),
    ("angle", '\u{2220}'),
    ("angmsd", '\u{2221}'),
    ("angmsdaa", '\u{29A8}'),
    ("angmsdab", '\u{29A9}'),
    ("angmsdac", '\u{29AA}'),
    ("angmsdad", '\u{29AB}'),
    ("angmsdae", '\u{29AC}'),
    ("angmsdaf", '\u{29AD}'),
    ("angmsdag", '\u{29AE}'),
    ("angmsdah", '\u{29AF}'),
    ("angrt", '\u{221F}'),
    ("angrtvb", '\u{22BE}'),
    ("angrtvbd", '\u{299D}'),
    ("angsph", '\u{2222}'),
    ("angst", '\u{00C5}'),
    ("angzarr", '\u{237C}'),
    ("aogon", '\u{0105}'),
    ("Aogon", '\u{0104}'),
    ("aopf", '\u{1D552}'),
    ("Aopf", '\u{1D538}'),
    ("ap", '\u{2248}'),
    ("apacir", '\u{2A6F}'),
    ("ape", '\u{224A}'),
    ("apE", '\u{2A70}'),
    ("apid", '\u{224B}'),
    ("ApplyFunction", '\u{2061}'),
    ("approx", '\u{2248}'),
    ("approxeq", '\u{224A}'),
    ("ascr", '\u{1D4B6}'),
    ("Ascr", '\u{1D49C}'),
    ("Assign", '\u{2254}'),
    ("ast", '*'),
    ("asympeq", '\u{224D}'),
    ("awconint", '\u{2233}'),
    ("awint", '\u{2A11}'),
    ("backcong", '\u{224C}'),
    ("backepsilon", '\u{03F6}'),
    ("backprime", '\u{2035}'),
    ("backsim", '\u{223D}'),
    ("backsimeq", '\u{22CD}'),
    ("Backslash", '\u{2216}'),
    ("Barv", '\u{2AE7}'),
    ("barvee", '\u{22BD}'),
    ("barwed", '\u{2305}'),
    ("Barwed", '\u{2306}'),
    ("barwedge", '\u{2305}'),
    ("bbrk", '\u{23B5}'),
    ("bbrktbrk", '\u{23B6}'),
    ("bcong", '\u{224C}'),
    ("bcy", '\u{0431}'),
    ("Bcy", '\u{0411}'),
    ("becaus", '\u{2235}'),
    ("because", '\u{2235}'),
    ("Because", '\u{2235}'),
    ("bemptyv", '\u{29B0}'),
    ("bepsi", '\u{03F6}'),
    ("bernou", '\u{212C}'),
    ("Bernoullis", '\u{212C}'),
    ("beth", '\u{2136}'),
    ("between", '\u{226C}'),
    ("bfr", '\u{1D51F}'),
    ("Bfr", '\u{1D505}'),
    ("bigcap", '\u{22C2}'),
    ("bigcirc", '\u{25EF}'),
    ("bigcup", '\u{22C3}'),
    ("bigodot", '\u{2A00}'),
    ("bigoplus", '\u{2A01}'),
    ("bigotimes", '\u{2A02}'),
    ("bigsqcup", '\u{2A06}'),
    ("bigstar", '\u{2605}'),
    ("bigtriangledown", '\u{25BD}'),
    ("bigtriangleup", '\u{25B3}'),
    ("biguplus", '\u{2A04}'),
    ("bigvee", '\u{22C1}'),
    ("bigwedge", '\u{22C0}'),
    ("bkarow", '\u{290D}'),
    ("blacklozenge", '\u{29EB}'),
    ("blacksquare", '\u{25AA}'),
    ("blacktriangle", '\u{25B4}'),
    ("blacktriangledown", '\u{25BE}'),
    ("blacktriangleleft", '\u{25C2}'),
    ("blacktriangleright", '\u{25B8}'),
    ("blank", '\u{2423}'),
    ("blk12", '\u{2592}'),
    ("blk14", '\u{2591}'),
    ("blk34", '\u{2593}'),
    ("block", '\u{2588}'),
    ("bnot", '\u{2310}'),
    ("bNot", '\u{2AED}'),
    ("bopf", '\u{1D553}'),
    ("Bopf", '\u{1D539}'),
    ("bot", '\u{22A5}'),
    ("bottom", '\u{22A5}'),
    ("bowtie", '\u{22C8}'),
    ("boxbox", '\u{29C9}'),
    ("boxdl", '\u{2510}'),
    ("boxDL", '\u{2557}'),
    ("boxDl", '\u{2556}'),
    ("boxdL", '\u{2555}'),
    ("boxdr", '\u{250C}'),
    ("boxDR", '\u{2554}'),
    ("boxDr", '\u{2553}'),
    ("boxdR", '\u{2552}'),
    ("boxh", '\u{2500}'),
    ("boxH", '\u{2550}'),
    ("boxhd", '\u{252C}'),
    ("boxHD", '\u{2566}'),
    ("boxHd", '\u{2564}'),
    ("boxhD", '\u{2565}'),
    ("boxhu", '\u{2534}'),
    ("boxHU", '\u{2569}'),
    ("boxHu", '\u{2567}'),
    ("boxhU", '\u{2568}'),
    ("boxminus", '\u{229F}'),
    ("boxplus", '\u{229E}'),
    ("boxtimes", '\u{22A0}'),
    ("boxul", '\u{2518}'),
    ("boxUL", '\u{255D}'),
    ("boxUl", '\u{255C}'),
    ("boxuL", '\u{255B}'),
    ("boxur", '\u{2514}'),
    ("boxUR", '\u{255A}'),
    ("boxUr", '\u{2559}'),
    ("boxuR", '\u{2558}'),
    ("boxv", '\u{2502}'),
    ("boxV", '\u{2551}'),
    ("boxvh", '\u{253C}'),
    ("boxVH", '\u{256C}'),
    ("boxVh", '\u{256B}'),
    ("boxvH", '\u{256A}'),
    ("boxvl", '\u{2524}'),
    ("boxVL", '\u{2563}'),
    ("boxVl", '\u{2562}'),
    ("boxvL", '\u{2561}'),
    ("boxvr", '\u{251C}'),
    ("boxVR", '\u{2560}'),
    ("boxVr", '\u{255F}'),
    ("boxvR", '\u{255E}'),
    ("bprime", '\u{2035}'),
    ("breve", '\u{02D8}'),
    ("Breve", '\u{02D8}'),
    ("bscr", '\u{1D4B7}'),
    ("Bscr", '\u{212C}'),
    ("bsemi", '\u{204F}'),
    ("bsim", '\u{223D}'),
    ("bsime", '\u{22CD}'),
    ("bsol", '\\'),
    ("bsolb", '\u{29C5}'),
    ("bsolhsub", '\u{27C8}'),
    ("bullet", '\u{2022}'),
    ("bump", '\u{224E}'),
    ("bumpe", '\u{224F}'),
    ("bumpE", '\u{2AAE}'),
    ("bumpeq", '\u{224F}'),
    ("Bumpeq", '\u{224E}'),
    ("cacute", '\u{0107}'),
    ("Cacute", '\u{0106}'),
    ("Cap", '\u{22D2}'),
    ("capand", '\u{2A44}'),
    ("capbrcup", '\u{2A49}'),
    ("capcap", '\u{2A4B}'),
    ("capcup", '\u{2A47}'),
    ("capdot", '\u{2A40}'),
    ("CapitalDifferentialD", '\u{2145}'),
    ("caret", '\u{2041}'),
    ("caron", '\u{02C7}'),
    ("Cayleys", '\u{212D}'),
    ("ccaps", '\u{2A4D}'),
    ("ccaron", '\u{010D}'),
    ("Ccaron", '\u{010C}'),
    ("ccirc", '\u{0109}'),
    ("Ccirc", '\u{0108}'),
    ("Cconint", '\u{2230}'),
    ("ccups", '\u{2A4C}'),
    ("ccupssm", '\u{2A50}'),
    ("cdot", '\u{010B}'),
    ("Cdot", '\u{010A}'),
    ("Cedilla", '\u{00B8}'),
    ("cemptyv", '\u{29B2}'),
    ("centerdot", '\u{00B7}'),
    ("CenterDot", '\u{00B7}'),
    ("cfr", '\u{1D520}'),
    ("Cfr", '\u{212D}'),
    ("chcy", '\u{0447}'),
    ("CHcy", '\u{0427}'),
    ("check", '\u{2713}'),
    ("checkmark", '\u{2713}'),
    ("cir", '\u{25CB}'),
    ("circeq", '\u{2257}'),
    ("circlearrowleft", '\u{21BA}'),
    ("circlearrowright", '\u{21BB}'),
    ("circledast", '\u{229B}'),
    ("circledcirc", '\u{229A}'),
    ("circleddash", '\u{229D}'),
    ("CircleDot", '\u{2299}'),
    ("circledR", '\u{00AE}'),
    ("circledS", '\u{24C8}'),
    ("CircleMinus", '\u{2296}'),
    ("CirclePlus", '\u{2295}'),
    ("CircleTimes", '\u{2297}'),
    ("cire", '\u{2257}'),
    ("cirE", '\u{29C3}'),
    ("cirfnint", '\u{2A10}'),
    ("cirmid", '\u{2AEF}'),
    ("cirscir", '\u{29C2}'),
    ("ClockwiseContourIntegral", '\u{2232}'),
    ("CloseCurlyDoubleQuote", '\u{201D}'),
    ("CloseCurlyQuote", '\u{2019}'),
    ("clubsuit", '\u{2663}'),
    ("colon", ':'),
    ("Colon", '\u{2237}'),
    ("colone", '\u{2254}'),
    ("Colone", '\u{2A74}'),
    ("coloneq", '\u{2254}'),
    ("comma", ','),
    ("commat", '@'),
    ("comp", '\u{2201}'),
    ("compfn", '\u{2218}'),
    ("complement", '\u{2201}'),
    ("complexes", '\u{2102}'),
    ("congdot", '\u{2A6D}'),
    ("Congruent", '\u{2261}'),
    ("conint", '\u{222E}'),
    ("Conint", '\u{222F}'),
    ("ContourIntegral", '\u{222E}'),
    ("copf", '\u{1D554}'),
    ("Copf", '\u{2102}'),
    ("coprod", '\u{2210}'),
    ("Coproduct", '\u{2210}'),
    ("copysr", '\u{2117}'),
    ("CounterClockwiseContourIntegral", '\u{2233}'),
    ("cross", '\u{2717}'),
    ("Cross", '\u{2A2F}'),
    ("cscr", '\u{1D4B8}'),
    ("Cscr", '\u{1D49E}'),
    ("csub", '\u{2ACF}'),
    ("csube", '\u{2AD1}'),
    ("csup", '\u{2AD0}'),
    ("csupe", '\u{2AD2}'),
    ("ctdot", '\u{22EF}'),
    ("cudarrl", '\u{2938}'),
    ("cudarrr", '\u{2935}'),
    ("cuepr", '\u{22DE}'),
    ("cuesc", '\u{22DF}'),
    ("cularr", '\u{21B6}'),
    ("cularrp", '\u{293D}'),
    ("Cup", '\u{22D3}'),
    ("cupbrcap", '\u{2A48}'),
    ("cupcap", '\u{2A46}'),
    ("CupCap", '\u{224D}'),
    ("cupcup", '\u{2A4A}'),
    ("cupdot", '\u{228D}'),
    ("cupor", '\u{2A45}'),
    ("curarr", '\u{21B7}'),
    ("curarrm", '\u{293C}'),
    ("curlyeqprec", '\u{22DE}'),
    ("curlyeqsucc", '\u{22DF}'),
    ("curlyvee", '\u{22CE}'),
    ("curlywedge", '\u{22CF}'),
    ("curvearrowleft", '\u{21B6}'),
    ("curvearrowright", '\u{21B7}'),
    ("cuvee", '\u{22CE}'),
    ("cuwed", '\u{22CF}'),
    ("cwconint", '\u{2232}'),
    ("cwint", '\u{2231}'),
    ("cylcty", '\u{232D}'),
    ("daleth", '\u{2138}'),
    ("Darr", '\u{21A1}'),
    ("dash", '\u{2010}'),
    ("dashv", '\u{22A3}'),
    ("Dashv", '\u{2AE4}'),
    ("dbkarow", '\u{290F}'),
    ("dblac", '\u{02DD}'),
    ("dcaron", '\u{010F}'),
    ("Dcaron", '\u{010E}'),
    ("dcy", '\u{0434}'),
    ("Dcy", '\u{0414}'),
    ("dd", '\u{2146}'),
    ("DD", '\u{2145}'),
    ("ddagger", '\u{2021}'),
    ("ddarr", '\u{21CA}'),
    ("DDotrahd", '\u{2911}'),
    ("ddotseq", '\u{2A77}'),
    ("Del", '\u{2207}'),
    ("demptyv", '\u{29B1}'),
    ("dfisht", '\u{297F}'),
    ("dfr", '\u{1D521}'),
    ("Dfr", '\u{1D507}'),
    ("dHar", '\u{2965}'),
    ("dharl", '\u{21C3}'),
    ("dharr", '\u{21C2}'),
    ("DiacriticalAcute", '\u{00B4}'),
    ("DiacriticalDot", '\u{02D9}'),
    ("DiacriticalDoubleAcute", '\u{02DD}'),
    ("DiacriticalGrave", '`'),
    ("DiacriticalTilde", '\u{02DC}'),
    ("diam", '\u{22C4}'),
    ("diamond", '\u{22C4}'),
    ("Diamond", '\u{22C4}'),
    ("diamondsuit", '\u{2666}'),
    ("die", '\u{00A8}'),
    ("DifferentialD", '\u{2146}'),
    ("digamma", '\u{03DD}'),
    ("disin", '\u{22F2}'),
    ("div", '\u{00F7}'),
    ("divideontimes", '\u{22C7}'),
    ("divonx", '\u{22C7}'),
    ("djcy", '\u{0452}'),
    ("DJcy", '\u{0402}'),
    ("dlcorn", '\u{231E}'),
    ("dlcrop", '\u{230D}'),
    ("dollar", '$'),
    ("dopf", '\u{1D555}'),
    ("Dopf", '\u{1D53B}'),
    ("dot", '\u{02D9}'),
    ("Dot", '\u{00A8}'),
    ("DotDot", '\u{20DC}'),
    ("doteq", '\u{2250}'),
    ("doteqdot", '\u{2251}'),
    ("DotEqual", '\u{2250}'),
    ("dotminus", '\u{2238}'),
    ("dotplus", '\u{2214}'),
    ("dotsquare", '\u{22A1}'),
    ("doublebarwedge", '\u{2306}'),
    ("DoubleContourIntegral", '\u{222F}'),
    ("DoubleDot", '\u{00A8}'),
    ("DoubleDownArrow", '\u{21D3}'),
    ("DoubleLeftArrow", '\u{21D0}'),
    ("DoubleLeftRightArrow", '\u{21D4}'),
    ("DoubleLeftTee", '\u{2AE4}'),
    ("DoubleLongLeftArrow", '\u{27F8}'),
    ("DoubleLongLeftRightArrow", '\u{27FA}'),
    ("DoubleLongRightArrow", '\u{27F9}'),
    ("DoubleRightArrow", '\u{21D2}'),
    ("DoubleRightTee", '\u{22A8}'),
    ("DoubleUpArrow", '\u{21D1}'),
    ("DoubleUpDownArrow", '\u{21D5}'),
    ("DoubleVerticalBar", '\u{2225}'),
    ("downarrow", '\u{2193}'),
    ("DownArrow", '\u{2193}'),
    ("Downarrow", '\u{21D3}'),
    ("DownArrowBar", '\u{2913}'),
    ("DownArrowUpArrow", '\u{21F5}'),
    ("DownBreve", '\u{0311}'),
    ("downdownarrows", '\u{21CA}'),
    ("downharpoonleft", '\u{21C3}'),
    ("downharpoonright", '\u{21C2}'),
    ("DownLeftRightVector", '\u{2950}'),
    ("DownLeftTeeVector", '\u{295E}'),
    ("DownLeftVector", '\u{21BD}'),
    ("DownLeftVectorBar", '\u{2956}'),
    ("DownRightTeeVector", '\u{295F}'),
    ("DownRightVector", '\u{21C1}'),
    ("DownRightVectorBar", '\u{2957}'),
    ("DownTee", '\u{22A4}'),
    ("DownTeeArrow", '\u{21A7}'),
    ("drbkarow", '\u{2910}'),
    ("drcorn", '\u{231F}'),
    ("drcrop", '\u{230C}'),
    ("dscr", '\u{1D4B9}'),
    ("Dscr", '\u{1D49F}'),
    ("dscy", '\u{0455}'),
    ("DScy", '\u{0405}'),
    ("dsol", '\u{29F6}'),
    ("dstrok", '\u{0111}'),
    ("Dstrok", '\u{0110}'),
    ("dtdot", '\u{22F1}'),
    ("dtri", '\u{25BF}'),
    ("dtrif", '\u{25BE}'),
    ("duarr", '\u{21F5}'),
    ("duhar", '\u{296F}'),
    ("dwangle", '\u{29A6}'),
    ("dzcy", '\u{045F}'),
    ("DZcy", '\u{040F}'),
    ("dzigrarr", '\u{27FF}'),
    ("easter", '\u{2A6E}'),
    ("ecaron", '\u{011B}'),
    ("Ecaron", '\u{011A}'),
    ("ecir", '\u{2256}'),
    ("ecolon", '\u{2255}'),
    ("ecy", '\u{044D}'),
    ("Ecy", '\u{042D}'),
    ("eDDot", '\u{2A77}'),
    ("edot", '\u{0117}'),
    ("Edot", '\u{0116}'),
    ("eDot", '\u{2251}'),
    ("ee", '\u{2147}'),
    ("efDot", '\u{2252}'),
    ("efr", '\u{1D522}'),
    ("Efr", '\u{1D508}'),
    ("eg", '\u{2A9A}'),
    ("egs", '\u{2A96}'),
    ("egsdot", '\u{2A98}'),
    ("el", '\u{2A99}'),
    ("Element", '\u{2208}'),
    ("elinters", '\u{23E7}'),
    ("ell", '\u{2113}'),
    ("els", '\u{2A95}'),
    ("elsdot", '\u{2A97}'),
    ("emacr", '\u{0113}'),
    ("Emacr", '\u{0112}'),
    ("emptyset", '\u{2205}'),
    ("EmptySmallSquare", '\u{25FB}'),
    ("emptyv", '\u{2205}'),
    ("EmptyVerySmallSquare", '\u{25AB}'),
    ("emsp13", '\u{2004}'),
    ("emsp14", '\u{2005}'),
    ("eng", '\u{014B}'),
    ("ENG", '\u{014A}'),
    ("eogon", '\u{0119}'),
    ("Eogon", '\u{0118}'),
    ("eopf", '\u{1D556}'),
    ("Eopf", '\u{1D53C}'),
    ("epar", '\u{22D5}'),
    ("eparsl", '\u{29E3}'),
    ("eplus", '\u{2A71}'),
    ("epsi", '\u{03B5}'),
    ("epsiv", '\u{03F5}'),
    ("eqcirc", '\u{2256}'),
    ("eqcolon", '\u{2255}'),
    ("eqsim", '\u{2242}'),
    ("eqslantgtr", '\u{2A96}'),
    ("eqslantless", '\u{2A95}'),
    ("Equal", '\u{2A75}'),
    ("equals", '='),
    ("EqualTilde", '\u{2242}'),
    ("equest", '\u{225F}'),
    ("Equilibrium", '\u{21CC}'),
    ("equivDD", '\u{2A78}'),
    ("eqvparsl", '\u{29E5}'),
    ("erarr", '\u{2971}'),
    ("erDot", '\u{2253}'),
    ("escr", '\u{212F}'),
    ("Escr", '\u{2130}'),
    ("esdot", '\u{2250}'),
    ("esim", '\u{2242}'),
    ("Esim", '\u{2A73}'),
    ("excl", '!'),
    ("Exists", '\u{2203}'),
    ("expectation", '\u{2130}'),
    ("exponentiale", '\u{2147}'),
    ("ExponentialE", '\u{2147}'),
    ("fallingdotseq", '\u{2252}'),
    ("fcy", '\u{0444}'),
    ("Fcy", '\u{0424}'),
    ("female", '\u{2640}'),
    ("ffilig", '\u{FB03}'),
    ("fflig", '\u{FB00}'),
    ("ffllig", '\u{FB04}'),
    ("ffr", '\u{1D523}'),
    ("Ffr", '\u{1D509}'),
    ("filig", '\u{FB01}'),
    ("FilledSmallSquare", '\u{25FC}'),
    ("FilledVerySmallSquare", '\u{25AA}'),
    ("flat", '\u{266D}'),
    ("fllig", '\u{FB02}'),
    ("fltns", '\u{25B1}'),
    ("fopf", '\u{1D557}'),
    ("Fopf", '\u{1D53D}'),
    ("ForAll", '\u{2200}'),
    ("fork", '\u{22D4}'),
    ("forkv", '\u{2AD9}'),
    ("Fouriertrf", '\u{2131}'),
    ("fpartint", '\u{2A0D}'),
    ("frac13", '\u{2153}'),
    ("frac15", '\u{2155}'),
    ("frac16", '\u{2159}'),
    ("frac18", '\u{215B}'),
    ("frac23", '\u{2154}'),
    ("frac25", '\u{2156}'),
    ("frac35", '\u{2157}'),
    ("frac38", '\u{215C}'),
    ("frac45", '\u{2158}'),
    ("frac56", '\u{215A}'),
    ("frac58", '\u{215D}'),
    ("frac78", '\u{215E}'),
    ("frown", '\u{2322}'),
    ("fscr", '\u{1D4BB}'),
    ("Fscr", '\u{2131}'),
    ("gacute", '\u{01F5}'),
    ("gammad", '\u{03DD}'),
    ("Gammad", '\u{03DC}'),
    ("gap", '\u{2A86}'),
    ("gbreve", '\u{011F}'),
    ("Gbreve", '\u{011E}'),
    ("Gcedil", '\u{0122}'),
    ("gcirc", '\u{011D}'),
    ("Gcirc", '\u{011C}'),
    ("gcy", '\u{0433}'),
    ("Gcy", '\u{0413}'),
    ("gdot", '\u{0121}'),
    ("Gdot", '\u{0120}'),
    ("gE", '\u{2267}'),
    ("gel", '\u{22DB}'),
    ("gEl", '\u{2A8C}'),
    ("geq", '\u{2265}'),
    ("geqq", '\u{2267}'),
    ("geqslant", '\u{2A7E}'),
    ("ges", '\u{2A7E}'),
    ("gescc", '\u{2AA9}'),
    ("gesdot", '\u{2A80}'),
    ("gesdoto", '\u{2A82}'),
    ("gesdotol", '\u{2A84}'),
    ("gesles", '\u{2A94}'),
    ("gfr", '\u{1D524}'),
    ("Gfr", '\u{1D50A}'),
    ("gg", '\u{226B}'),
    ("Gg", '\u{22D9}'),
    ("ggg", '\u{22D9}'),
    ("gimel", '\u{2137}'),
    ("gjcy", '\u{0453}'),
    ("GJcy", '\u{0403}'),
    ("gl", '\u{2277}'),
    ("gla", '\u{2AA5}'),
    ("glE", '\u{2A92}'),
    ("glj", '\u{2AA4}'),
    ("gnap", '\u{2A8A}'),
    ("gnapprox", '\u{2A8A}'),
    ("gne", '\u{2A88}'),
    ("gnE", '\u{2269}'),
    ("gneq", '\u{2A88}'),
    ("gneqq", '\u{2269}'),
    ("gnsim", '\u{22E7}'),
    ("gopf", '\u{1D558}'),
    ("Gopf", '\u{1D53E}'),
    ("grave", '`'),
    ("GreaterEqual", '\u{2265}'),
    ("GreaterEqualLess", '\u{22DB}'),
    ("GreaterFullEqual", '\u{2267}'),
    ("GreaterGreater", '\u{2AA2}'),
    ("GreaterLess", '\u{2277}'),
    ("GreaterSlantEqual", '\u{2A7E}'),
    ("GreaterTilde", '\u{2273}'),
    ("gscr", '\u{210A}'),
    ("Gscr", '\u{1D4A2}'),
    ("gsim", '\u{2273}'),
    ("gsime", '\u{2A8E}'),
    ("gsiml", '\u{2A90}'),
    ("Gt", '\u{226B}'),
    ("gtcc", '\u{2AA7}'),
    ("gtcir", '\u{2A7A}'),
    ("gtdot", '\u{22D7}'),
    ("gtlPar", '\u{2995}'),
    ("gtquest", '\u{2A7C}'),
    ("gtrapprox", '\u{2A86}'),
    ("gtrarr", '\u{2978}'),
    ("gtrdot", '\u{22D7}'),
    ("gtreqless", '\u{22DB}'),
    ("gtreqqless", '\u{2A8C}'),
    ("gtrless", '\u{2277}'),
    ("gtrsim", '\u{2273}'),
    ("Hacek", '\u{02C7}'),
    ("hairsp", '\u{200A}'),
    ("half", '\u{00BD}'),
    ("hamilt", '\u{210B}'),
    ("hardcy", '\u{044A}'),
    ("HARDcy", '\u{042A}'),
    ("harrcir", '\u{2948}'),
    ("harrw", '\u{21AD}'),
    ("Hat", '^'),
    ("hbar", '\u{210F}'),
    ("hcirc", '\u{0125}'),
    ("Hcirc", '\u{0124}'),
    ("heartsuit", '\u{2665}'),
    ("hercon", '\u{22B9}'),
    ("hfr", '\u{1D525}'),
    ("Hfr", '\u{210C}'),
    ("HilbertSpace", '\u{210B}'),
    ("hksearow", '\u{2925}'),
    ("hkswarow", '\u{2926}'),
    ("hoarr", '\u{21FF}'),
    ("homtht", '\u{223B}'),
    ("hookleftarrow", '\u{21A9}'),
    ("hookrightarrow", '\u{21AA}'),
    ("hopf", '\u{1D559}'),
    ("Hopf", '\u{210D}'),
    ("horbar", '\u{2015}'),
    ("HorizontalLine", '\u{2500}'),
    ("hscr", '\u{1D4BD}'),
    ("Hscr", '\u{210B}'),
    ("hslash", '\u{210F}'),
    ("hstrok", '\u{0127}'),
    ("Hstrok", '\u{0126}'),
    ("HumpDownHump", '\u{224E}'),
    ("HumpEqual", '\u{224F}'),
    ("hybull", '\u{2043}'),
    ("hyphen", '\u{2010}'),
    ("ic", '\u{2063}'),
    ("icy", '\u{0438}'),
    ("Icy", '\u{0418}'),
    ("Idot", '\u{0130}'),
    ("iecy", '\u{0435}'),
    ("IEcy", '\u{0415}'),
    ("iff", '\u{21D4}'),
    ("ifr", '\u{1D526}'),
    ("Ifr", '\u{2111}'),
    ("ii", '\u{2148}'),
    ("iiiint", '\u{2A0C}'),
    ("iiint", '\u{222D}'),
    ("iinfin", '\u{29DC}'),
    ("iiota", '\u{2129}'),
    ("ijlig", '\u{0133}'),
    ("IJlig", '\u{0132}'),
    ("Im", '\u{2111}'),
    ("imacr", '\u{012B}'),
    ("Imacr", '\u{012A}'),
    ("ImaginaryI", '\u{2148}'),
    ("imagline", '\u{2110}'),
    ("imagpart", '\u{2111}'),
    ("imath", '\u{0131}'),
    ("imof", '\u{22B7}'),
    ("imped", '\u{01B5}'),
    ("Implies", '\u{21D2}'),
    ("in", '\u{2208}'),
    ("incare", '\u{2105}'),
    ("infintie", '\u{29DD}'),
    ("inodot", '\u{0131}'),
    ("Int", '\u{222C}'),
    ("intcal", '\u{22BA}'),
    ("integers", '\u{2124}'),
    ("Integral", '\u{222B}'),
    ("intercal", '\u{22BA}'),
    ("Intersection", '\u{22C2}'),
    ("intlarhk", '\u{2A17}'),
    ("intprod", '\u{2A3C}'),
    ("InvisibleComma", '\u{2063}'),
    ("InvisibleTimes", '\u{2062}'),
    ("iocy", '\u{0451}'),
    ("IOcy", '\u{0401}'),
    ("iogon", '\u{012F}'),
    ("Iogon", '\u{012E}'),
    ("iopf", '\u{1D55A}'),
    ("Iopf", '\u{1D540}'),
    ("iprod", '\u{2A3C}'),
    ("iscr", '\u{1D4BE}'),
    ("Iscr", '\u{2110}'),
    ("isindot", '\u{22F5}'),
    ("isinE", '\u{22F9}'),
    ("isins", '\u{22F4}'),
    ("isinsv", '\u{22F3}'),
    ("isinv", '\u{2208}'),
    ("it", '\u{2062}'),
    ("itilde", '\u{0129}'),
    ("Itilde", '\u{0128}'),
    ("iukcy", '\u{0456}'),
    ("Iukcy", '\u{0406}'),
    ("jcirc", '\u{0135}'),
    ("Jcirc", '\u{0134}'),
    ("jcy", '\u{0439}'),
    ("Jcy", '\u{0419}'),
    ("jfr", '\u{1D527}'),
    ("Jfr", '\u{1D50D}'),
    ("jmath", '\u{0237}'),
    ("jopf", '\u{1D55B}'),
    ("Jopf", '\u{1D541}'),
    ("jscr", '\u{1D4BF}'),
    ("Jscr", '\u{1D4A5}'),
    ("jsercy", '\u{0458}'),
    ("Jsercy", '\u{0408}'),
    ("jukcy", '\u{0454}'),
    ("Jukcy", '\u{0404}'),
    ("kappav", '\u{03F0}'),
    ("kcedil", '\u{0137}'),
    ("Kcedil", '\u{0136}'),
    ("kcy", '\u{043A}'),
    ("Kcy", '\u{041A}'),
    ("kfr", '\u{1D528}'),
    ("Kfr", '\u{1D50E}'),
    ("kgreen", '\u{0138}'),
    ("khcy", '\u{0445}'),
    ("KHcy", '\u{0425}'),
    ("kjcy", '\u{045C}'),
    ("KJcy", '\u{040C}'),
    ("kopf", '\u{1D55C}'),
    ("Kopf", '\u{1D542}'),
    ("kscr", '\u{1D4C0}'),
    ("Kscr", '\u{1D4A6}'),
    ("lAarr", '\u{21DA}'),
    ("lacute", '\u{013A}'),
    ("Lacute", '\u{0139}'),
    ("laemptyv", '\u{29B4}'),
    ("lagran", '\u{2112}'),
    ("Lang", '\u{27EA}'),
    ("langd", '\u{2991}'),
    ("langle", '\u{27E8}'),
    ("lap", '\u{2A85}'),
    ("Laplacetrf", '\u{2112}'),
    ("Larr", '\u{219E}'),
    ("larrb", '\u{21E4}'),
    ("larrbfs", '\u{291F}'),
    ("larrfs", '\u{291D}'),
    ("larrhk", '\u{21A9}'),
    ("larrlp", '\u{21AB}'),
    ("larrpl", '\u{2939}'),
    ("larrsim", '\u{2973}'),
    ("larrtl", '\u{21A2}'),
    ("lat", '\u{2AAB}'),
    ("latail", '\u{2919}'),
    ("lAtail", '\u{291B}'),
    ("late", '\u{2AAD}'),
    ("lbarr", '\u{290C}'),
    ("lBarr", '\u{290E}'),
    ("lbbrk", '\u{2772}'),
    ("lbrace", '{'),
    ("lbrack", '['),
    ("lbrke", '\u{298B}'),
    ("lbrksld", '\u{298F}'),
    ("lbrkslu", '\u{298D}'),
    ("lcaron", '\u{013E}'),
    ("Lcaron", '\u{013D}'),
    ("lcedil", '\u{013C}'),
    ("Lcedil", '\u{013B}'),
    ("lcub", '{'),
    ("lcy", '\u{043B}'),
    ("Lcy", '\u{041B}'),
    ("ldca", '\u{2936}'),
    ("ldquor", '\u{201E}'),
    ("ldrdhar", '\u{2967}'),
    ("ldrushar", '\u{294B}'),
    ("ldsh", '\u{21B2}'),
    ("lE", '\u{2266}'),
    ("LeftAngleBracket", '\u{27E8}'),
    ("leftarrow", '\u{2190}'),
    ("LeftArrow", '\u{2190}'),
    ("Leftarrow", '\u{21D0}'),
    ("LeftArrowBar", '\u{21E4}'),
    ("LeftArrowRightArrow", '\u{21C6}'),
    ("leftarrowtail", '\u{21A2}'),
    ("LeftCeiling", '\u{2308}'),
    ("LeftDoubleBracket", '\u{27E6}'),
    ("LeftDownTeeVector", '\u{2961}'),
    ("LeftDownVector", '\u{21C3}'),
    ("LeftDownVectorBar", '\u{2959}'),
    ("LeftFloor", '\u{230A}'),
    ("leftharpoondown", '\u{21BD}'),
    ("leftharpoonup", '\u{21BC}'),
    ("leftleftarrows", '\u{21C7}'),
    ("leftrightarrow", '\u{2194}'),
    ("LeftRightArrow", '\u{2194}'),
    ("Leftrightarrow", '\u{21D4}'),
    ("leftrightarrows", '\u{21C6}'),
    ("leftrightharpoons", '\u{21CB}'),
    ("leftrightsquigarrow", '\u{21AD}'),
    ("LeftRightVector", '\u{294E}'),
    ("LeftTee", '\u{22A3}'),
    ("LeftTeeArrow", '\u{21A4}'),
    ("LeftTeeVector", '\u{295A}'),
    ("leftthreetimes", '\u{22CB}'),
    ("LeftTriangle", '\u{22B2}'),
    ("LeftTriangleBar", '\u{29CF}'),
    ("LeftTriangleEqual", '\u{22B4}'),
    ("LeftUpDownVector", '\u{2951}'),
    ("LeftUpTeeVector", '\u{2960}'),
    ("LeftUpVector", '\u{21BF}'),
    ("LeftUpVectorBar", '\u{2958}'),
    ("LeftVector", '\u{21BC}'),
    ("LeftVectorBar", '\u{2952}'),
    ("leg", '\u{22DA}'),
    ("lEg", '\u{2A8B}'),
    ("leq", '\u{2264}'),
    ("leqq", '\u{2266}'),
    ("leqslant", '\u{2A7D}'),
    ("les", '\u{2A7D}'),
    ("lescc", '\u{2AA8}'),
    ("lesdot", '\u{2A7F}'),
    ("lesdoto", '\u{2A81}'),
    ("lesdotor", '\u{2A83}'),
    ("lesges", '\u{2A93}'),
    ("lessapprox", '\u{2A85}'),
    ("lessdot", '\u{22D6}'),
    ("lesseqgtr", '\u{22DA}'),
    ("lesseqqgtr", '\u{2A8B}'),
    ("LessEqualGreater", '\u{22DA}'),
    ("LessFullEqual", '\u{2266}'),
    ("LessGreater", '\u{2276}'),
    ("lessgtr", '\u{2276}'),
    ("LessLess", '\u{2AA1}'),
    ("lesssim", '\u{2272}'),
    ("LessSlantEqual", '\u{2A7D}'),
    ("LessTilde", '\u{2272}'),
    ("lfisht", '\u{297C}'),
    ("lfr", '\u{1D529}'),
    ("Lfr", '\u{1D50F}'),
    ("lg", '\u{2276}'),
    ("lgE", '\u{2A91}'),
    ("lHar", '\u{2962}'),
    ("lhard", '\u{21BD}'),
    ("lharu", '\u{21BC}'),
    ("lharul", '\u{296A}'),
    ("lhblk", '\u{2584}'),
    ("ljcy", '\u{0459}'),
    ("LJcy", '\u{0409}'),
    ("ll", '\u{226A}'),
    ("Ll", '\u{22D8}'),
    ("llarr", '\u{21C7}'),
    ("llcorner", '\u{231E}'),
    ("Lleftarrow", '\u{21DA}'),
    ("llhard", '\u{296B}'),
    ("lltri", '\u{25FA}'),
    ("lmidot", '\u{0140}'),
    ("Lmidot", '\u{013F}'),
    ("lmoust", '\u{23B0}'),
    ("lmoustache", '\u{23B0}'),
    ("lnap", '\u{2A89}'),
    ("lnapprox", '\u{2A89}'),
    ("lne", '\u{2A87}'),
    ("lnE", '\u{2268}'),
    ("lneq", '\u{2A87}'),
    ("lneqq", '\u{2268}'),
    ("lnsim", '\u{22E6}'),
    ("loang", '\u{27EC}'),
    ("loarr", '\u{21FD}'),
    ("lobrk", '\u{27E6}'),
    ("longleftarrow", '\u{27F5}'),
    ("LongLeftArrow", '\u{27F5}'),
    ("Longleftarrow", '\u{27F8}'),
    ("longleftrightarrow", '\u{27F7}'),
    ("LongLeftRightArrow", '\u{27F7}'),
    ("Longleftrightarrow", '\u{27FA}'),
    ("longmapsto", '\u{27FC}'),
    ("longrightarrow", '\u{27F6}'),
    ("LongRightArrow", '\u{27F6}'),
    ("Longrightarrow", '\u{27F9}'),
    ("looparrowleft", '\u{21AB}'),
    ("looparrowright", '\u{21AC}'),
    ("lopar", '\u{2985}'),
    ("lopf", '\u{1D55D}'),
    ("Lopf", '\u{1D543}'),
    ("loplus", '\u{2A2D}'),
    ("lotimes", '\u{2A34}'),
    ("lowbar", '_'),
    ("LowerLeftArrow", '\u{2199}'),
    ("LowerRightArrow", '\u{2198}'),
    ("lozenge", '\u{25CA}'),
    ("lozf", '\u{29EB}'),
    ("lpar", '('),
    ("lparlt", '\u{2993}'),
    ("lrarr", '\u{21C6}'),
    ("lrcorner", '\u{231F}'),
    ("lrhar", '\u{21CB}'),
    ("lrhard", '\u{296D}'),
    ("lrtri", '\u{22BF}'),
    ("lscr", '\u{1D4C1}'),
    ("Lscr", '\u{2112}'),
    ("lsh", '\u{21B0}'),
    ("Lsh", '\u{21B0}'),
    ("lsim", '\u{2272}'),
    ("lsime", '\u{2A8D}'),
    ("lsimg", '\u{2A8F}'),
    ("lsqb", '['),
    ("lsquor", '\u{201A}'),
    ("lstrok", '\u{0142}'),
    ("Lstrok", '\u{0141}'),
    ("Lt", '\u{226A}'),
    ("ltcc", '\u{2AA6}'),
    ("ltcir", '\u{2A79}'),
    ("ltdot", '\u{22D6}'),
    ("lthree", '\u{22CB}'),
    ("ltimes", '\u{22C9}'),
    ("ltlarr", '\u{2976}'),
    ("ltquest", '\u{2A7B}'),
    ("ltri", '\u{25C3}'),
    ("ltrie", '\u{22B4}'),
    ("ltrif", '\u{25C2}'),
    ("ltrPar", '\u{2996}'),
    ("lurdshar", '\u{294A}'),
    ("luruhar", '\u{2966}'),
    ("male", '\u{2642}'),
    ("malt", '\u{2720}'),
    ("maltese", '\u{2720}'),
    ("map", '\u{21A6}'),
    ("Map", '\u{2905}'),
    ("mapsto", '\u{21A6}'),
    ("mapstodown", '\u{21A7}'),
    ("mapstoleft", '\u{21A4}'),
    ("mapstoup", '\u{21A5}'),
    ("marker", '\u{25AE}'),
    ("mcomma", '\u{2A29}'),
    ("mcy", '\u{043C}'),
    ("Mcy", '\u{041C}'),
    ("mDDot", '\u{223A}'),
    ("measuredangle", '\u{2221}'),
    ("MediumSpace", '\u{205F}'),
    ("Mellintrf", '\u{2133}'),
    ("mfr", '\u{1D52A}'),
    ("Mfr", '\u{1D510}'),
    ("mho", '\u{2127}'),
    ("mid", '\u{2223}'),
    ("midast", '*'),
    ("midcir", '\u{2AF0}'),
    ("minusb", '\u{229F}'),
    ("minusd", '\u{2238}'),
    ("minusdu", '\u{2A2A}'),
    ("MinusPlus", '\u{2213}'),
    ("mlcp", '\u{2ADB}'),
    ("mldr", '\u{2026}'),
    ("mnplus", '\u{2213}'),
    ("models", '\u{22A7}'),
    ("mopf", '\u{1D55E}'),
    ("Mopf", '\u{1D544}'),
    ("mp", '\u{2213}'),
    ("mscr", '\u{1D4C2}'),
    ("Mscr", '\u{2133}'),
    ("mstpos", '\u{223E}'),
    ("multimap", '\u{22B8}'),
    ("mumap", '\u{22B8}'),
    ("nacute", '\u{0144}'),
    ("Nacute", '\u{0143}'),
    ("nap", '\u{2249}'),
    ("napos", '\u{0149}'),
    ("napprox", '\u{2249}'),
    ("natur", '\u{266E}'),
    ("natural", '\u{266E}'),
    ("naturals", '\u{2115}'),
    ("ncap", '\u{2A43}'),
    ("ncaron", '\u{0148}'),
    ("Ncaron", '\u{0147}'),
    ("ncedil", '\u{0146}'),
    ("Ncedil", '\u{0145}'),
    ("ncong", '\u{2247}'),
    ("ncup", '\u{2A42}'),
    ("ncy", '\u{043D}'),
    ("Ncy", '\u{041D}'),
    ("nearhk", '\u{2924}'),
    ("nearr", '\u{2197}'),
    ("neArr", '\u{21D7}'),
    ("nearrow", '\u{2197}'),
    ("NegativeMediumSpace", '\u{200B}'),
    ("NegativeThickSpace", '\u{200B}'),
    ("NegativeThinSpace", '\u{200B}'),
    ("NegativeVeryThinSpace", '\u{200B}'),
    ("nequiv", '\u{2262}'),
    ("nesear", '\u{2928}'),
    ("NestedGreaterGreater", '\u{226B}'),
    ("NestedLessLess", '\u{226A}'),
    ("NewLine", '\u{000A}'),
    ("nexist", '\u{2204}'),
    ("nexists", '\u{2204}'),
    ("nfr", '\u{1D52B}'),
    ("Nfr", '\u{1D511}'),
    ("nge", '\u{2271}'),
    ("ngeq", '\u{2271}'),
    ("ngsim", '\u{2275}'),
    ("ngt", '\u{226F}'),
    ("ngtr", '\u{226F}'),
    ("nharr", '\u{21AE}'),
    ("nhArr", '\u{21CE}'),
    ("nhpar", '\u{2AF2}'),
    ("nis", '\u{22FC}'),
    ("nisd", '\u{22FA}'),
    ("niv", '\u{220B}'),
    ("njcy", '\u{045A}'),
    ("NJcy", '\u{040A}'),
    ("nlarr", '\u{219A}'),
    ("nlArr", '\u{21CD}'),
    ("nldr", '\u{2025}'),
    ("nle", '\u{2270}'),
    ("nleftarrow", '\u{219A}'),
    ("nLeftarrow", '\u{21CD}'),
    ("nleftrightarrow", '\u{21AE}'),
    ("nLeftrightarrow", '\u{21CE}'),
    ("nleq", '\u{2270}'),
    ("nless", '\u{226E}'),
    ("nlsim", '\u{2274}'),
    ("nlt", '\u{226E}'),
    ("nltri", '\u{22EA}'),
    ("nltrie", '\u{22EC}'),
    ("nmid", '\u{2224}'),
    ("NoBreak", '\u{2060}'),
    ("NonBreakingSpace", '\u{00A0}'),
    ("nopf", '\u{1D55F}'),
    ("Nopf", '\u{2115}'),
    ("Not", '\u{2AEC}'),
    ("NotCongruent", '\u{2262}'),
    ("NotCupCap", '\u{226D}'),
    ("NotDoubleVerticalBar", '\u{2226}'),
    ("NotElement", '\u{2209}'),
    ("NotEqual", '\u{2260}'),
    ("NotExists", '\u{2204}'),
    ("NotGreater", '\u{226F}'),
    ("NotGreaterEqual", '\u{2271}'),
    ("NotGreaterLess", '\u{2279}'),
    ("NotGreaterTilde", '\u{2275}'),
    ("notinva", '\u{2209}'),
    ("notinvb", '\u{22F7}'),
    ("notinvc", '\u{22F6}'),
    ("NotLeftTriangle", '\u{22EA}'),
    ("NotLeftTriangleEqual", '\u{22EC}'),
    ("NotLess", '\u{226E}'),
    ("NotLessEqual", '\u{2270}'),
    ("NotLessGreater", '\u{2278}'),
    ("NotLessTilde", '\u{2274}'),
    ("notni", '\u{220C}'),
    ("notniva", '\u{220C}'),
    ("notnivb", '\u{22FE}'),
    ("notnivc", '\u{22FD}'),
    ("NotPrecedes", '\u{2280}'),
    ("NotPrecedesSlantEqual", '\u{22E0}'),
    ("NotReverseElement", '\u{220C}'),
    ("NotRightTriangle", '\u{22EB}'),
    ("NotRightTriangleEqual", '\u{22ED}'),
    ("NotSquareSubsetEqual", '\u{22E2}'),
    ("NotSquareSupersetEqual", '\u{22E3}'),
    ("NotSubsetEqual", '\u{2288}'),
    ("NotSucceeds", '\u{2281}'),
    ("NotSucceedsSlantEqual", '\u{22E1}'),
    ("NotSupersetEqual", '\u{2289}'),
    ("NotTilde", '\u{2241}'),
    ("NotTildeEqual", '\u{2244}'),
    ("NotTildeFullEqual", '\u{2247}'),
    ("NotTildeTilde", '\u{2249}'),
    ("NotVerticalBar", '\u{2224}'),
    ("npar", '\u{2226}'),
    ("nparallel", '\u{2226}'),
    ("npolint", '\u{2A14}'),
    ("npr", '\u{2280}'),
    ("nprcue", '\u{22E0}'),
    ("nprec", '\u{2280}'),
    ("nrarr", '\u{219B}'),
    ("nrArr", '\u{21CF}'),
    ("nrightarrow", '\u{219B}'),
    ("nRightarrow", '\u{21CF}'),
    ("nrtri", '\u{22EB}'),
    ("nrtrie", '\u{22ED}'),
    ("nsc", '\u{2281}'),
    ("nsccue", '\u{22E1}'),
    ("nscr", '\u{1D4C3}'),
    ("Nscr", '\u{1D4A9}'),
    ("nshortmid", '\u{2224}'),
    ("nshortparallel", '\u{2226}'),
    ("nsim", '\u{2241}'),
    ("nsime", '\u{2244}'),
    ("nsimeq", '\u{2244}'),
    ("nsmid", '\u{2224}'),
    ("nspar", '\u{2226}'),
    ("nsqsube", '\u{22E2}'),
    ("nsqsupe", '\u{22E3}'),
    ("nsube", '\u{2288}'),
    ("nsubseteq", '\u{2288}'),
    ("nsucc", '\u{2281}'),
    ("nsup", '\u{2285}'),
    ("nsupe", '\u{2289}'),
    ("nsupseteq", '\u{2289}'),
    ("ntgl", '\u{2279}'),
    ("ntlg", '\u{2278}'),
    ("ntriangleleft", '\u{22EA}'),
    ("ntrianglelefteq", '\u{22EC}'),
    ("ntriangleright", '\u{22EB}'),
    ("ntrianglerighteq", '\u{22ED}'),
    ("num", '#'),
    ("numero", '\u{2116}'),
    ("numsp", '\u{2007}'),
    ("nvdash", '\u{22AC}'),
    ("nVDash", '\u{22AF}'),
    ("nVdash", '\u{22AE}'),
    ("nvDash", '\u{22AD}'),
    ("nvHarr", '\u{2904}'),
    ("nvinfin", '\u{29DE}'),
    ("nvlArr", '\u{2902}'),
    ("nvrArr", '\u{2903}'),
    ("nwarhk", '\u{2923}'),
    ("nwarr", '\u{2196}'),
    ("nwArr", '\u{21D6}'),
    ("nwarrow", '\u{2196}'),
    ("nwnear", '\u{2927}'),
    ("oast", '\u{229B}'),
    ("ocir", '\u{229A}'),
    ("ocy", '\u{043E}'),
    ("Ocy", '\u{041E}'),
    ("odash", '\u{229D}'),
    ("odblac", '\u{0151}'),
    ("Odblac", '\u{0150}'),
    ("odiv", '\u{2A38}'),
    ("odot", '\u{2299}'),
    ("odsold", '\u{29BC}'),
    ("ofcir", '\u{29BF}'),
    ("ofr", '\u{1D52C}'),
    ("Ofr", '\u{1D512}'),
    ("ogon", '\u{02DB}'),
    ("ogt", '\u{29C1}'),
    ("ohbar", '\u{29B5}'),
    ("ohm", '\u{03A9}'),
    ("oint", '\u{222E}'),
    ("olarr", '\u{21BA}'),
    ("olcir", '\u{29BE}'),
    ("olcross", '\u{29BB}'),
    ("olt", '\u{29C0}'),
    ("omacr", '\u{014D}'),
    ("Omacr", '\u{014C}'),
    ("omid", '\u{29B6}'),
    ("ominus", '\u{2296}'),
    ("oopf", '\u{1D560}'),
    ("Oopf", '\u{1D546}'),
    ("opar", '\u{29B7}'),
    ("OpenCurlyDoubleQuote", '\u{201C}'),
    ("OpenCurlyQuote", '\u{2018}'),
    ("operp", '\u{29B9}'),
    ("Or", '\u{2A54}'),
    ("orarr", '\u{21BB}'),
    ("ord", '\u{2A5D}'),
    ("order", '\u{2134}'),
    ("orderof", '\u{2134}'),
    ("origof", '\u{22B6}'),
    ("oror", '\u{2A56}'),
    ("orslope", '\u{2A57}'),
    ("orv", '\u{2A5B}'),
    ("oS", '\u{24C8}'),
    ("oscr", '\u{2134}'),
    ("Oscr", '\u{1D4AA}'),
    ("osol", '\u{2298}'),
    ("Otimes", '\u{2A37}'),
    ("otimesas", '\u{2A36}'),
    ("ovbar", '\u{233D}'),
    ("OverBar", '\u{203E}'),
    ("OverBrace", '\u{23DE}'),
    ("OverBracket", '\u{23B4}'),
    ("OverParenthesis", '\u{23DC}'),
    ("par", '\u{2225}'),
    ("parallel", '\u{2225}'),
    ("parsim", '\u{2AF3}'),
    ("parsl", '\u{2AFD}'),
    ("PartialD", '\u{2202}'),
    ("pcy", '\u{043F}'),
    ("Pcy", '\u{041F}'),
    ("percnt", '%'),
    ("period", '.'),
    ("pertenk", '\u{2031}'),
    ("pfr", '\u{1D52D}'),
    ("Pfr", '\u{1D513}'),
    ("phiv", '\u{03D5}'),
    ("phmmat", '\u{2133}'),
    ("phone", '\u{260E}'),
    ("pitchfork", '\u{22D4}'),
    ("planck", '\u{210F}'),
    ("planckh", '\u{210E}'),
    ("plankv", '\u{210F}'),
    ("plus", '+'),
    ("plusacir", '\u{2A23}'),
    ("plusb", '\u{229E}'),
    ("pluscir", '\u{2A22}'),
    ("plusdo", '\u{2214}'),
    ("plusdu", '\u{2A25}'),
    ("pluse", '\u{2A72}'),
    ("PlusMinus", '\u{00B1}'),
    ("plussim", '\u{2A26}'),
    ("plustwo", '\u{2A27}'),
    ("pm", '\u{00B1}'),
    ("Poincareplane", '\u{210C}'),
    ("pointint", '\u{2A15}'),
    ("popf", '\u{1D561}'),
    ("Popf", '\u{2119}'),
    ("pr", '\u{227A}'),
    ("Pr", '\u{2ABB}'),
    ("prap", '\u{2AB7}'),
    ("prcue", '\u{227C}'),
    ("pre", '\u{2AAF}'),
    ("prE", '\u{2AB3}'),
    ("prec", '\u{227A}'),
    ("precapprox", '\u{2AB7}'),
    ("preccurlyeq", '\u{227C}'),
    ("Precedes", '\u{227A}'),
    ("PrecedesEqual", '\u{2AAF}'),
    ("PrecedesSlantEqual", '\u{227C}'),
    ("PrecedesTilde", '\u{227E}'),
    ("preceq", '\u{2AAF}'),
    ("precnapprox", '\u{2AB9}'),
    ("precneqq", '\u{2AB5}'),
    ("precnsim", '\u{22E8}'),
    ("precsim", '\u{227E}'),
    ("primes", '\u{2119}'),
    ("prnap", '\u{2AB9}'),
    ("prnE", '\u{2AB5}'),
    ("prnsim", '\u{22E8}'),
    ("Product", '\u{220F}'),
    ("profalar", '\u{232E}'),
    ("profline", '\u{2312}'),
    ("profsurf", '\u{2313}'),
    ("Proportion", '\u{2237}'),
    ("Proportional", '\u{221D}'),
    ("propto", '\u{221D}'),
    ("prsim", '\u{227E}'),
    ("prurel", '\u{22B0}'),
    ("pscr", '\u{1D4C5}'),
    ("Pscr", '\u{1D4AB}'),
    ("puncsp", '\u{2008}'),
    ("qfr", '\u{1D52E}'),
    ("Qfr", '\u{1D514}'),
    ("qint", '\u{2A0C}'),
    ("qopf", '\u{1D562}'),
    ("Qopf", '\u{211A}'),
    ("qprime", '\u{2057}'),
    ("qscr", '\u{1D4C6}'),
    ("Qscr", '\u{1D4AC}'),
    ("quaternions", '\u{210D}'),
    ("quatint", '\u{2A16}'),
    ("quest", '?'),
    ("questeq", '\u{225F}'),
    ("rAarr", '\u{21DB}'),
    ("racute", '\u{0155}'),
    ("Racute", '\u{0154}'),
    ("raemptyv", '\u{29B3}'),
    ("Rang", '\u{27EB}'),
    ("rangd", '\u{2992}'),
    ("range", '\u{29A5}'),
    ("rangle", '\u{27E9}'),
    ("Rarr", '\u{21A0}'),
    ("rarrap", '\u{2975}'),
    ("rarrb", '\u{21E5}'),
    ("rarrbfs", '\u{2920}'),
    ("rarrc", '\u{2933}'),
    ("rarrfs", '\u{291E}'),
    ("rarrhk", '\u{21AA}'),
    ("rarrlp", '\u{21AC}'),
    ("rarrpl", '\u{2945}'),
    ("rarrsim", '\u{2974}'),
    ("rarrtl", '\u{21A3}'),
    ("Rarrtl", '\u{2916}'),
    ("rarrw", '\u{219D}'),
    ("ratail", '\u{291A}'),
    ("rAtail", '\u{291C}'),
    ("ratio", '\u{2236}'),
    ("rationals", '\u{211A}'),
    ("rbarr", '\u{290D}'),
    ("RBarr", '\u{2910}'),
    ("rBarr", '\u{290F}'),
    ("rbbrk", '\u{2773}'),
    ("rbrace", '}'),
    ("rbrack", ']'),
    ("rbrke", '\u{298C}'),
    ("rbrksld", '\u{298E}'),
    ("rbrkslu", '\u{2990}'),
    ("rcaron", '\u{0159}'),
    ("Rcaron", '\u{0158}'),
    ("rcedil", '\u{0157}'),
    ("Rcedil", '\u{0156}'),
    ("rcub", '}'),
    ("rcy", '\u{0440}'),
    ("Rcy", '\u{0420}'),
    ("rdca", '\u{2937}'),
    ("rdldhar", '\u{2969}'),
    ("rdquor", '\u{201D}'),
    ("rdsh", '\u{21B3}'),
    ("Re", '\u{211C}'),
    ("realine", '\u{211B}'),
    ("realpart", '\u{211C}'),
    ("reals", '\u{211D}'),
    ("rect", '\u{25AD}'),
    ("ReverseElement", '\u{220B}'),
    ("ReverseEquilibrium", '\u{21CB}'),
    ("ReverseUpEquilibrium", '\u{296F}'),
    ("rfisht", '\u{297D}'),
    ("rfr", '\u{1D52F}'),
    ("Rfr", '\u{211C}'),
    ("rHar", '\u{2964}'),
    ("rhard", '\u{21C1}'),
    ("rharu", '\u{21C0}'),
    ("rharul", '\u{296C}'),
    ("rhov", '\u{03F1}'),
    ("RightAngleBracket", '\u{27E9}'),
    ("rightarrow", '\u{2192}'),
    ("RightArrow", '\u{2192}'),
    ("Rightarrow", '\u{21D2}'),
    ("RightArrowBar", '\u{21E5}'),
    ("RightArrowLeftArrow", '\u{21C4}'),
    ("rightarrowtail", '\u{21A3}'),
    ("RightCeiling", '\u{2309}'),
    ("RightDoubleBracket", '\u{27E7}'),
    ("RightDownTeeVector", '\u{295D}'),
    ("RightDownVector", '\u{21C2}'),
    ("RightDownVectorBar", '\u{2955}'),
    ("RightFloor", '\u{230B}'),
    ("rightharpoondown", '\u{21C1}'),
    ("rightharpoonup", '\u{21C0}'),
    ("rightleftarrows", '\u{21C4}'),
    ("rightleftharpoons", '\u{21CC}'),
    ("rightrightarrows", '\u{21C9}'),
    ("rightsquigarrow", '\u{219D}'),
    ("RightTee", '\u{22A2}'),
    ("RightTeeArrow", '\u{21A6}'),
    ("RightTeeVector", '\u{295B}'),
    ("rightthreetimes", '\u{22CC}'),
    ("RightTriangle", '\u{22B3}'),
    ("RightTriangleBar", '\u{29D0}'),
    ("RightTriangleEqual", '\u{22B5}'),
    ("RightUpDownVector", '\u{294F}'),
    ("RightUpTeeVector", '\u{295C}'),
    ("RightUpVector", '\u{21BE}'),
    ("RightUpVectorBar", '\u{2954}'),
    ("RightVector", '\u{21C0}'),
    ("RightVectorBar", '\u{2953}'),
    ("ring", '\u{02DA}'),
    ("risingdotseq", '\u{2253}'),
    ("rlarr", '\u{21C4}'),
    ("rlhar", '\u{21CC}'),
    ("rmoust", '\u{23B1}'),
    ("rmoustache", '\u{23B1}'),
    ("rnmid", '\u{2AEE}'),
    ("roang", '\u{27ED}'),
    ("roarr", '\u{21FE}'),
    ("robrk", '\u{27E7}'),
    ("ropar", '\u{2986}'),
    ("ropf", '\u{1D563}'),
    ("Ropf", '\u{211D}'),
    ("roplus", '\u{2A2E}'),
    ("rotimes", '\u{2A35}'),
    ("RoundImplies", '\u{2970}'),
    ("rpar", ')'),
    ("rpargt", '\u{2994}'),
    ("rppolint", '\u{2A12}'),
    ("rrarr", '\u{21C9}'),
    ("Rrightarrow", '\u{21DB}'),
    ("rscr", '\u{1D4C7}'),
    ("Rscr", '\u{211B}'),
    ("rsh", '\u{21B1}'),
    ("Rsh", '\u{21B1}'),
    ("rsqb", ']'),
    ("rsquor", '\u{2019}'),
    ("rthree", '\u{22CC}'),
    ("rtimes", '\u{22CA}'),
    ("rtri", '\u{25B9}'),
    ("rtrie", '\u{22B5}'),
    ("rtrif", '\u{25B8}'),
    ("rtriltri", '\u{29CE}'),
    ("RuleDelayed", '\u{29F4}'),
    ("ruluhar", '\u{2968}'),
    ("rx", '\u{211E}'),
    ("sacute", '\u{015B}'),
    ("Sacute", '\u{015A}'),
    ("sc", '\u{227B}'),
    ("Sc", '\u{2ABC}'),
    ("scap", '\u{2AB8}'),
    ("sccue", '\u{227D}'),
    ("sce", '\u{2AB0}'),
    ("scE", '\u{2AB4}'),
    ("scedil", '\u{015F}'),
    ("Scedil", '\u{015E}'),
    ("scirc", '\u{015D}'),
    ("Scirc", '\u{015C}'),
    ("scnap", '\u{2ABA}'),
    ("scnE", '\u{2AB6}'),
    ("scnsim", '\u{22E9}'),
    ("scpolint", '\u{2A13}'),
    ("scsim", '\u{227F}'),
    ("scy", '\u{0441}'),
    ("Scy", '\u{0421}'),
    ("sdotb", '\u{22A1}'),
    ("sdote", '\u{2A66}'),
    ("searhk", '\u{2925}'),
    ("searr", '\u{2198}'),
    ("seArr", '\u{21D8}'),
    ("searrow", '\u{2198}'),
    ("semi", ';'),
    ("seswar", '\u{2929}'),
    ("setminus", '\u{2216}'),
    ("setmn", '\u{2216}'),
    ("sext", '\u{2736}'),
    ("sfr", '\u{1D530}'),
    ("Sfr", '\u{1D516}'),
    ("sfrown", '\u{2322}'),
    ("sharp", '\u{266F}'),
    ("shchcy", '\u{0449}'),
    ("SHCHcy", '\u{0429}'),
    ("shcy", '\u{0448}'),
    ("SHcy", '\u{0428}'),
    ("ShortDownArrow", '\u{2193}'),
    ("ShortLeftArrow", '\u{2190}'),
    ("shortmid", '\u{2223}'),
    ("shortparallel", '\u{2225}'),
    ("ShortRightArrow", '\u{2192}'),
    ("ShortUpArrow", '\u{2191}'),
    ("sigmav", '\u{03C2}'),
    ("simdot", '\u{2A6A}'),
    ("sime", '\u{2243}'),
    ("simeq", '\u{2243}'),
    ("simg", '\u{2A9E}'),
    ("simgE", '\u{2AA0}'),
    ("siml", '\u{2A9D}'),
    ("simlE", '\u{2A9F}'),
    ("simne", '\u{2246}'),
    ("simplus", '\u{2A24}'),
    ("simrarr", '\u{2972}'),
    ("slarr", '\u{2190}'),
    ("SmallCircle", '\u{2218}'),
    ("smallsetminus", '\u{2216}'),
    ("smashp", '\u{2A33}'),
    ("smeparsl", '\u{29E4}'),
    ("smid", '\u{2223}'),
    ("smile", '\u{2323}'),
    ("smt", '\u{2AAA}'),
    ("smte", '\u{2AAC}'),
    ("softcy", '\u{044C}'),
    ("SOFTcy", '\u{042C}'),
    ("sol", '/'),
    ("solb", '\u{29C4}'),
    ("solbar", '\u{233F}'),
    ("sopf", '\u{1D564}'),
    ("Sopf", '\u{1D54A}'),
    ("spadesuit", '\u{2660}'),
    ("spar", '\u{2225}'),
    ("sqcap", '\u{2293}'),
    ("sqcup", '\u{2294}'),
    ("Sqrt", '\u{221A}'),
    ("sqsub", '\u{228F}'),
    ("sqsube", '\u{2291}'),
    ("sqsubset", '\u{228F}'),
    ("sqsubseteq", '\u{2291}'),
    ("sqsup", '\u{2290}'),
    ("sqsupe", '\u{2292}'),
    ("sqsupset", '\u{2290}'),
    ("sqsupseteq", '\u{2292}'),
    ("squ", '\u{25A1}'),
    ("square", '\u{25A1}'),
    ("Square", '\u{25A1}'),
    ("SquareIntersection", '\u{2293}'),
    ("SquareSubset", '\u{228F}'),
    ("SquareSubsetEqual", '\u{2291}'),
    ("SquareSuperset", '\u{2290}'),
    ("SquareSupersetEqual", '\u{2292}'),
    ("SquareUnion", '\u{2294}'),
    ("squarf", '\u{25AA}'),
    ("squf", '\u{25AA}'),
    ("srarr", '\u{2192}'),
    ("sscr", '\u{1D4C8}'),
    ("Sscr", '\u{1D4AE}'),
    ("ssetmn", '\u{2216}'),
    ("ssmile", '\u{2323}'),
    ("sstarf", '\u{22C6}'),
    ("star", '\u{2606}'),
    ("Star", '\u{22C6}'),
    ("starf", '\u{2605}'),
    ("straightepsilon", '\u{03F5}'),
    ("straightphi", '\u{03D5}'),
    ("strns", '\u{00AF}'),
    ("Sub", '\u{22D0}'),
    ("subdot", '\u{2ABD}'),
    ("subE", '\u{2AC5}'),
    ("subedot", '\u{2AC3}'),
    ("submult", '\u{2AC1}'),
    ("subne", '\u{228A}'),
    ("subnE", '\u{2ACB}'),
    ("subplus", '\u{2ABF}'),
    ("subrarr", '\u{2979}'),
    ("subset", '\u{2282}'),
    ("Subset", '\u{22D0}'),
    ("subseteq", '\u{2286}'),
    ("subseteqq", '\u{2AC5}'),
    ("SubsetEqual", '\u{2286}'),
    ("subsetneq", '\u{228A}'),
    ("subsetneqq", '\u{2ACB}'),
    ("subsim", '\u{2AC7}'),
    ("subsub", '\u{2AD5}'),
    ("subsup", '\u{2AD3}'),
    ("succ", '\u{227B}'),
    ("succapprox", '\u{2AB8}'),
    ("succcurlyeq", '\u{227D}'),
    ("Succeeds", '\u{227B}'),
    ("SucceedsEqual", '\u{2AB0}'),
    ("SucceedsSlantEqual", '\u{227D}'),
    ("SucceedsTilde", '\u{227F}'),
    ("succeq", '\u{2AB0}'),
    ("succnapprox", '\u{2ABA}'),
    ("succneqq", '\u{2AB6}'),
    ("succnsim", '\u{22E9}'),
    ("succsim", '\u{227F}'),
    ("SuchThat", '\u{220B}'),
    ("Sum", '\u{2211}'),
    ("sung", '\u{266A}'),
    ("Sup", '\u{22D1}'),
    ("supdot", '\u{2ABE}'),
    ("supdsub", '\u{2AD8}'),
    ("supE", '\u{2AC6}'),
    ("supedot", '\u{2AC4}'),
    ("Superset", '\u{2283}'),
    ("SupersetEqual", '\u{2287}'),
    ("suphsol", '\u{27C9}'),
    ("suphsub", '\u{2AD7}'),
    ("suplarr", '\u{297B}'),
    ("supmult", '\u{2AC2}'),
    ("supne", '\u{228B}'),
    ("supnE", '\u{2ACC}'),
    ("supplus", '\u{2AC0}'),
    ("supset", '\u{2283}'),
    ("Supset", '\u{22D1}'),
    ("supseteq", '\u{2287}'),
    ("supseteqq", '\u{2AC6}'),
    ("supsetneq", '\u{228B}'),
    ("supsetneqq", '\u{2ACC}'),
    ("supsim", '\u{2AC8}'),
    ("supsub", '\u{2AD4}'),
    ("supsup", '\u{2AD6}'),
    ("swarhk", '\u{2926}'),
    ("swarr", '\u{2199}'),
    ("swArr", '\u{21D9}'),
    ("swarrow", '\u{2199}'),
    ("swnwar", '\u{292A}'),
    ("Tab", '\u{0009}'),
    ("target", '\u{2316}'),
    ("tbrk", '\u{23B4}'),
    ("tcaron", '\u{0165}'),
    ("Tcaron", '\u{0164}'),
    ("tcedil", '\u{0163}'),
    ("Tcedil", '\u{0162}'),
    ("tcy", '\u{0442}'),
    ("Tcy", '\u{0422}'),
    ("tdot", '\u{20DB}'),
    ("telrec", '\u{2315}'),
    ("tfr", '\u{1D531}'),
    ("Tfr", '\u{1D517}'),
    ("therefore", '\u{2234}'),
    ("Therefore", '\u{2234}'),
    ("thetav", '\u{03D1}'),
    ("thickapprox", '\u{2248}'),
    ("thicksim", '\u{223C}'),
    ("ThinSpace", '\u{2009}'),
    ("thkap", '\u{2248}'),
    ("thksim", '\u{223C}'),
    ("Tilde", '\u{223C}'),
    ("TildeEqual", '\u{2243}'),
    ("TildeFullEqual", '\u{2245}'),
    ("TildeTilde", '\u{2248}'),
    ("timesb", '\u{22A0}'),
    ("timesbar", '\u{2A31}'),
    ("timesd", '\u{2A30}'),
    ("tint", '\u{222D}'),
    ("toea", '\u{2928}'),
    ("top", '\u{22A4}'),
    ("topbot", '\u{2336}'),
    ("topcir", '\u{2AF1}'),
    ("topf", '\u{1D565}'),
    ("Topf", '\u{1D54B}'),
    ("topfork", '\u{2ADA}'),
    ("tosa", '\u{2929}'),
    ("tprime", '\u{2034}'),
    ("TRADE", '\u{2122}'),
    ("triangle", '\u{25B5}'),
    ("triangledown", '\u{25BF}'),
    ("triangleleft", '\u{25C3}'),
    ("trianglelefteq", '\u{22B4}'),
    ("triangleq", '\u{225C}'),
    ("triangleright", '\u{25B9}'),
    ("trianglerighteq", '\u{22B5}'),
    ("tridot", '\u{25EC}'),
    ("trie", '\u{225C}'),
    ("triminus", '\u{2A3A}'),
    ("TripleDot", '\u{20DB}'),
    ("triplus", '\u{2A39}'),
    ("trisb", '\u{29CD}'),
    ("tritime", '\u{2A3B}'),
    ("trpezium", '\u{23E2}'),
    ("tscr", '\u{1D4C9}'),
    ("Tscr", '\u{1D4AF}'),
    ("tscy", '\u{0446}'),
    ("TScy", '\u{0426}'),
    ("tshcy", '\u{045B}'),
    ("TSHcy", '\u{040B}'),
    ("tstrok", '\u{0167}'),
    ("Tstrok", '\u{0166}'),
    ("twixt", '\u{226C}'),
    ("twoheadleftarrow", '\u{219E}'),
    ("twoheadrightarrow", '\u{21A0}'),
    ("Uarr", '\u{219F}'),
    ("Uarrocir", '\u{2949}'),
    ("ubrcy", '\u{045E}'),
    ("Ubrcy", '\u{040E}'),
    ("ubreve", '\u{016D}'),
    ("Ubreve", '\u{016C}'),
    ("ucy", '\u{0443}'),
    ("Ucy", '\u{0423}'),
    ("udarr", '\u{21C5}'),
    ("udblac", '\u{0171}'),
    ("Udblac", '\u{0170}'),
    ("udhar", '\u{296E}'),
    ("ufisht", '\u{297E}'),
    ("ufr", '\u{1D532}'),
    ("Ufr", '\u{1D518}'),
    ("uHar", '\u{2963}'),
    ("uharl", '\u{21BF}'),
    ("uharr", '\u{21BE}'),
    ("uhblk", '\u{2580}'),
    ("ulcorn", '\u{231C}'),
    ("ulcorner", '\u{231C}'),
    ("ulcrop", '\u{230F}'),
    ("ultri", '\u{25F8}'),
    ("umacr", '\u{016B}'),
    ("Umacr", '\u{016A}'),
    ("UnderBar", '_'),
    ("UnderBrace", '\u{23DF}'),
    ("UnderBracket", '\u{23B5}'),
    ("UnderParenthesis", '\u{23DD}'),
    ("Union", '\u{22C3}'),
    ("UnionPlus", '\u{228E}'),
    ("uogon", '\u{0173}'),
    ("Uogon", '\u{0172}'),
    ("uopf", '\u{1D566}'),
    ("Uopf", '\u{1D54C}'),
    ("uparrow", '\u{2191}'),
    ("UpArrow", '\u{2191}'),
    ("Uparrow", '\u{21D1}'),
    ("UpArrowBar", '\u{2912}'),
    ("UpArrowDownArrow", '\u{21C5}'),
    ("updownarrow", '\u{2195}'),
    ("UpDownArrow", '\u{2195}'),
    ("Updownarrow", '\u{21D5}'),
    ("UpEquilibrium", '\u{296E}'),
    ("upharpoonleft", '\u{21BF}'),
    ("upharpoonright", '\u{21BE}'),
    ("uplus", '\u{228E}'),
    ("UpperLeftArrow", '\u{2196}'),
    ("UpperRightArrow", '\u{2197}'),
    ("upsi", '\u{03C5}'),
    ("Upsi", '\u{03D2}'),
    ("UpTee", '\u{22A5}'),
    ("UpTeeArrow", '\u{21A5}'),
    ("upuparrows", '\u{21C8}'),
    ("urcorn", '\u{231D}'),
    ("urcorner", '\u{231D}'),
    ("urcrop", '\u{230E}'),
    ("uring", '\u{016F}'),
    ("Uring", '\u{016E}'),
    ("urtri", '\u{25F9}'),
    ("uscr", '\u{1D4CA}'),
    ("Uscr", '\u{1D4B0}'),
    ("utdot", '\u{22F0}'),
    ("utilde", '\u{0169}'),
    ("Utilde", '\u{0168}'),
    ("utri", '\u{25B5}'),
    ("utrif", '\u{25B4}'),
    ("uuarr", '\u{21C8}'),
    ("uwangle", '\u{29A7}'),
    ("vangrt", '\u{299C}'),
    ("varepsilon", '\u{03F5}'),
    ("varkappa", '\u{03F0}'),
    ("varnothing", '\u{2205}'),
    ("varphi", '\u{03D5}'),
    ("varpi", '\u{03D6}'),
    ("varpropto", '\u{221D}'),
    ("varr", '\u{2195}'),
    ("vArr", '\u{21D5}'),
    ("varrho", '\u{03F1}'),
    ("varsigma", '\u{03C2}'),
    ("vartheta", '\u{03D1}'),
    ("vartriangleleft", '\u{22B2}'),
    ("vartriangleright", '\u{22B3}'),
    ("Vbar", '\u{2AEB}'),
    ("vBar", '\u{2AE8}'),
    ("vBarv", '\u{2AE9}'),
    ("vcy", '\u{0432}'),
    ("Vcy", '\u{0412}'),
    ("vdash", '\u{22A2}'),
    ("VDash", '\u{22AB}'),
    ("Vdash", '\u{22A9}'),
    ("vDash", '\u{22A8}'),
    ("Vdashl", '\u{2AE6}'),
    ("vee", '\u{2228}'),
    ("Vee", '\u{22C1}'),
    ("veebar", '\u{22BB}'),
    ("veeeq", '\u{225A}'),
    ("vellip", '\u{22EE}'),
    ("verbar", '|'),
    ("Verbar", '\u{2016}'),
    ("vert", '|'),
    ("Vert", '\u{2016}'),
    ("VerticalBar", '\u{2223}'),
    ("VerticalLine", '|'),
    ("VerticalSeparator", '\u{2758}'),
    ("VerticalTilde", '\u{2240}'),
    ("VeryThinSpace", '\u{200A}'),
    ("vfr", '\u{1D533}'),
    ("Vfr", '\u{1D519}'),
    ("vltri", '\u{22B2}'),
    ("vopf", '\u{1D567}'),
    ("Vopf", '\u{1D54D}'),
    ("vprop", '\u{221D}'),
    ("vrtri", '\u{22B3}'),
    ("vscr", '\u{1D4CB}'),
    ("Vscr", '\u{1D4B1}'),
    ("Vvdash", '\u{22AA}'),
    ("vzigzag", '\u{299A}'),
    ("wcirc", '\u{0175}'),
    ("Wcirc", '\u{0174}'),
    ("wedbar", '\u{2A5F}'),
    ("wedge", '\u{2227}'),
    ("Wedge", '\u{22C0}'),
    ("wedgeq", '\u{2259}'),
    ("wfr", '\u{1D534}'),
    ("Wfr", '\u{1D51A}'),
    ("wopf", '\u{1D568}'),
    ("Wopf", '\u{1D54E}'),
    ("wp", '\u{2118}'),
    ("wr", '\u{2240}'),
    ("wreath", '\u{2240}'),
    ("wscr", '\u{1D4CC}'),
    ("Wscr", '\u{1D4B2}'),
    ("xcap", '\u{22C2}'),
    ("xcirc", '\u{25EF}'),
    ("xcup", '\u{22C3}'),
    ("xdtri", '\u{25BD}'),
    ("xfr", '\u{1D535}'),
    ("Xfr", '\u{1D51B}'),
    ("xharr", '\u{27F7}'),
    ("xhArr", '\u{27FA}'),
    ("xlarr", '\u{27F5}'),
    ("xlArr", '\u{27F8}'),
    ("xmap", '\u{27FC}'),
    ("xnis", '\u{22FB}'),
    ("xodot", '\u{2A00}'),
    ("xopf", '\u{1D569}'),
    ("Xopf", '\u{1D54F}'),
    ("xoplus", '\u{2A01}'),
    ("xotime", '\u{2A02}'),
    ("xrarr", '\u{27F6}'),
    ("xrArr", '\u{27F9}'),
    ("xscr", '\u{1D4CD}'),
    ("Xscr", '\u{1D4B3}'),
    ("xsqcup", '\u{2A06}'),
    ("xuplus", '\u{2A04}'),
    ("xutri", '\u{25B3}'),
    ("xvee", '\u{22C1}'),
    ("xwedge", '\u{22C0}'),
    ("yacy", '\u{044F}'),
    ("YAcy", '\u{042F}'),
    ("ycirc", '\u{0177}'),
    ("Ycirc", '\u{0176}'),
    ("ycy", '\u{044B}'),
    ("Ycy", '\u{042B}'),
    ("yfr", '\u{1D536}'),
    ("Yfr", '\u{1D51C}'),
    ("yicy", '\u{0457}'),
    ("YIcy", '\u{0407}'),
    ("yopf", '\u{1D56A}'),
    ("Yopf", '\u{1D550}'),
    ("yscr", '\u{1D4CE}'),
    ("Yscr", '\u{1D4B4}'),
    ("yucy", '\u{044E}'),
    ("YUcy", '\u{042E}'),
    ("zacute", '\u{017A}'),
    ("Zacute", '\u{0179}'),
    ("zcaron", '\u{017E}'),
    ("Zcaron", '\u{017D}'),
    ("zcy", '\u{0437}'),
    ("Zcy", '\u{0417}'),
    ("zdot", '\u{017C}'),
    ("Zdot", '\u{017B}'),
    ("zeetrf", '\u{2128}'),
    ("ZeroWidthSpace", '\u{200B}'),
    ("zfr", '\u{1D537}'),
    ("Zfr", '\u{2128}'),
    ("zhcy", '\u{0436}'),
    ("ZHcy", '\u{0416}'),
    ("zigrarr", '\u{21DD}'),
    ("zopf", '\u{1D56B}'),
    ("Zopf", '\u{2124}'),
    ("zscr", '\u{1D4CF}'),
    ("Zscr", '\u{1D4B5}'),
];

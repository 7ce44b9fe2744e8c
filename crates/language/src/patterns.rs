//! Pattern sources for the built-in grammars.
//!
//! Every pattern is compiled in multi-line mode, so `^` and `$` anchor at line
//! boundaries as well as at the edges of the matched region. `$` alone stops
//! short of a `\r\n` ending, so line-bound rules match `[^\r\n]` and test for
//! the end of a line with `(?=\r?$)`.
//!
//! Several grammars share the generic sources (keywords, numbers, constants,
//! quoted strings).

/// Keywords of the C family and its neighbours (Go, Java, JS, Kotlin, Python, Swift, shell).
pub const KEYWORDS: &str = concat!(
	r"\b(abstract|and|arguments|as(m|sert|sociativity)?|auto|break|",
	r"case|catch|chan|char|class|con(st|tinue|venience)|continue|",
	r"de(bugger|f|fault|fer|in|init|l|lete)|didset|do(ne)?|dynamic",
	r"(type)?|el(if|se)|enum|esac|eval|ex(cept|ec|plicit|port|",
	r"tends|tension|tern)|fal(lthrough|se)|fi(nal|nally)?|for|",
	r"friend|from|fun(c(tion)?)?|get|global|go(to)?|if|",
	r"im(plements|port)|in(fix|it|line|out|stanceof|terface|",
	r"ternal)?|is|lambda|lazy|left|let|local|map|mut(able|ating)|",
	r"namespace|native|new|nil|none|nonmutating|not|null|",
	r"operator|optional|or|override|package|pass|postfix|",
	r"pre(cedence|fix)|print|private|prot(ected|ocol)|public|",
	r"raise|range|register|required|return|right|select|self|",
	r"set|signed|sizeof|static|strictfp|struct|subscript|super|",
	r"switch|synchronized|template|th(en|is|rows?)|transient|",
	r"true|try|type(alias|def|id|name|of)?|un(ion|owned|signed)|",
	r"using|va(l|r)|virtual|void|volatile|weak|wh(en|ere|ile)|willset|",
	r"with|yield)\b",
);

/// Primitive type names.
pub const TYPES: &str = r"\b(j?bool(ean)?|(u|j)?(byte|char|double|float|int(eger)?|long|short))\b";

/// `@Annotation` markers.
pub const ANNOTATION: &str = r"@\b[A-Za-z]+\b";

/// Line comments, double-quoted strings and block comments.
///
/// Strings are folded into the comment rule so that, being applied last, it
/// paints over keywords that happen to appear inside them.
pub const CC_COMMENT: &str = r#"//[^\r\n]*|("(?:\\[^"]|\\"|.)*?")|(?s:/\*.*?\*/)"#;

/// Capitalised identifiers.
pub const CLASS: &str = r"\b[A-Z][A-Za-z0-9_]+\b";

/// `SCREAMING_CASE` and `kConstant` names.
pub const CONSTANT: &str = r"\b(([A-Z][A-Z0-9_]+)|(k[A-Z][A-Za-z0-9]+))\b";

/// Runs of operator characters.
///
/// `+-=` is a character range, so digits and `,./:;<` are part of the set.
pub const OPERATOR: &str = r"[+-=:;<>|!%^&*/?]+";

/// Integer and decimal literals with an optional exponent.
pub const NUMBER: &str = r"\b\d+(\.\d*)?(e[+-]?\d+)?\b";

/// Double-quoted strings with C escapes.
pub const QUOTED: &str = r#""([^\\"]+|\\([btnfr"'\\]|[0-3]?[0-7]{1,2}|u[0-9a-fA-F]{4}))*""#;

/// HTML element names, matched case-insensitively.
pub const HTML_TAGS: &str = concat!(
	r"(?i)\b(html|base|head|link|meta|style|title|body|address|article|",
	r"aside|footer|header|h\d|hgroup|main|nav|section|blockquote|dd|",
	r"dir|div|dl|dt|figcaption|figure|hr|li|main|ol|p|pre|ul|a|abbr|",
	r"b|bdi|bdo|br|cite|code|data|dfn|em|i|kbd|mark|q|rb|rp|rt|rtc|",
	r"ruby|s|samp|small|span|strong|sub|sup|time|tt|u|var|wbr|area|",
	r"audio|img|map|track|video|applet|embed|iframe|noembed|object|",
	r"param|picture|source|canvas|noscript|script|del|ins|caption|",
	r"col|colgroup|table|tbody|td|tfoot|th|thead|tr|button|datalist|",
	r"fieldset|form|input|label|legend|meter|optgroup|option|output|",
	r"progress|select|textarea|details|dialog|menu|menuitem|summary|",
	r"content|element|shadow|slot|template|acronym|applet|basefont|",
	r"bgsound|big|blink|center|command|content|dir|element|font|",
	r"frame|frameset|image|isindex|keygen|listing|marquee|menuitem|",
	r"multicol|nextid|nobr|noembed|noframes|plaintext|shadow|spacer|",
	r"strike|tt|xmp|doctype)\b",
);

/// HTML attribute names.
pub const HTML_ATTRS: &str = concat!(
	r"\b(accept|accesskey|action|align|allow|alt|async|",
	r"auto(capitalize|complete|focus|play)|background|",
	r"bgcolor|border|buffered|challenge|charset|checked|cite|",
	r"class|code(base)?|color|cols|colspan|content(",
	r"editable)?|contextmenu|controls|coords|crossorigin|",
	r"csp|data|datetime|decoding|def(ault|er)|dir|dirname|",
	r"disabled|download|draggable|dropzone|enctype|enterkeyhint|",
	r"equiv|for|form(action|novalidate)?|headers|height|",
	r"hidden|high|href(lang)?|http|icon|id|importance|",
	r"inputmode|integrity|intrinsicsize|ismap|itemprop|keytype|",
	r"kind|label|lang|language|list|loading|loop|low|manifest|",
	r"max|maxlength|media|method|min|minlength|multiple|muted|",
	r"name|novalidate|open|optimum|pattern|ping|placeholder|",
	r"poster|preload|property|radiogroup|readonly|referrerpolicy|",
	r"rel|required|reversed|rows|rowspan|sandbox|scope|scoped|",
	r"selected|shape|size|sizes|slot|span|spellcheck|src|srcdoc|",
	r"srclang|srcset|start|step|style|summary|tabindex|target|",
	r"title|translate|type|usemap|value|width|wrap)\b",
);

/// `<!-- ... -->` on a single line.
pub const HTML_COMMENT: &str = r"<!--.*?-->";

/// CSS property and value vocabulary.
pub const CSS_STYLES: &str = concat!(
	r"\b(action|active|additive|adjust|after|align|all|alternates|",
	r"animation|annotation|area|areas|as|asian|attachment|attr|",
	r"auto|backdrop|backface|background|basis|before|behavior|",
	r"bezier|bidi|blend|block|blur|border|both|bottom|box|break|",
	r"brightness|calc|caps|caption|caret|cells|center|ch|change|",
	r"character|charset|checked|child|circle|clamp|clear|clip|",
	r"cm|collapse|color|column|columns|combine|composite|conic|",
	r"content|contrast|count|counter|counters|cross|cubic|cue|",
	r"cursor|decoration|default|deg|delay|dir|direction|",
	r"disabled|display|dpcm|dpi|dppx|drop|duration|east|element|",
	r"ellipse|em|emphasis|empty|enabled|end|env|events|ex|face|",
	r"fade|fallback|family|feature|fill|filter|first|fit|flex|",
	r"float|flow|focus|font|format|forms|fr|frames|fullscreen|",
	r"function|gap|grad|gradient|grayscale|grid|grow|hanging|",
	r"height|historical|hover|hsl|hsla|hue|hyphens|hz|image|import|",
	r"in|increment|indent|indeterminate|index|inherit|initial|",
	r"inline|inset|inside|invalid|invert|isolation|items|",
	r"iteration|justify|khz|kerning|keyframes|lang|language|",
	r"last|layout|leader|left|letter|ligatures|line|linear|link|",
	r"list|local|margin|mask|matrix|matrix3d|max|media|min|",
	r"minmax|mix|mm|mode|ms|name|namespace|negative|none|not|nth|",
	r"numeric|object|of|offset|only|opacity|optical|optional|",
	r"order|orientation|origin|ornaments|orphans|out|outline|",
	r"outset|outside|overflow|override|pad|padding|page|path|pc|",
	r"perspective|place|placeholder|play|pointer|polygon|",
	r"position|prefix|property|pt|punctuation|px|q|quotes|rad|",
	r"radial|radius|range|read|rect|relative|rem|rendering|repeat|",
	r"repeating|required|reset|resize|revert|rgb|rgba|right|",
	r"root|rotate|rotate3d|rotatex|rotatey|rotatez|row|rows|",
	r"rule|s|saturate|scale|scale3d|scalex|scaley|scalez|scope|",
	r"scroll|scrollbar|selection|self|sepia|set|settings|shadow|",
	r"shape|shrink|side|size|sizing|skew|skewx|skewy|slice|",
	r"slotted|snap|source|space|spacing|span|speak|src|start|",
	r"state|static|steps|stop|stretch|style|styleset|stylistic|suffix|",
	r"supports|swash|symbols|synthesis|system|tab|table|target|",
	r"template|text|threshold|timing|top|touch|transform|",
	r"transition|translate|translate3d|translatex|translatey|",
	r"translatez|turn|type|underline|unicode|unset|upright|url|",
	r"user|valid|values|var|variant|variation|vertical|vh|",
	r"viewport|visibility|visited|vmax|vmin|vw|weight|white|",
	r"widows|width|will|word|wrap|write|writing|x|y|z|zoom)\b",
);

/// `#rrggbb` style colour literals.
pub const CSS_HEX: &str = r"#\b[A-Fa-f0-9]+\b";

/// Org headlines (`* Heading`) and keyword lines (`#+TITLE:`).
pub const ORG_HEADER: &str = r"(^\*+ +[^\r\n]+)|(^#\+[^\r\n]+)";

/// Org `[[target][description]]` links.
pub const ORG_LINK: &str = r"\[\[.*?\]\]";

/// Org inline markup: `*bold*`, `/italic/`, `~code~`, `=verbatim=`, `+strike+`, `_underline_`.
pub const ORG_EMPH: &str = r"(([*~/+=]+)\b(\w| )+?\b\2)|(\b(_{1,2})(\w| )+?\5\b)";

/// Org `# comment` lines and `@@export snippets@@`.
pub const ORG_COMMENT: &str = r"(^# [^\r\n]*)|(@@.*?@@)";

/// Setext headers (text over `---`/`===`) and ATX headers (`# Title`).
pub const MD_HEADER: &str = r"(^[^\r\n]+\s+-+(?=\r?$))|(^[^\r\n]+\s+=+(?=\r?$))|(^#+ +[^\r\n]+)";

/// Inline links, images, reference links and reference definitions.
pub const MD_LINK: &str = r"(!?\[.+\] *\(.+\))|(!?\[.+\] *\[.+\])|( *\[.+\]: +[^\r\n]+)";

/// `*`, `**`, `~`, `~~`, `_` and `__` emphasis.
pub const MD_EMPH: &str = r"(([*~]{1,2})\b(\w| )+?\b\2)|(\b(_{1,2})(\w| )+?\5\b)";

/// Fenced blocks, four-space indented blocks and inline code spans.
pub const MD_CODE: &str = r"(?s:^```.*?^```)|(^ {4,}[^\r\n]+)|(`.+?`)";

/// `$name`, `${...}` and `$(...)` expansions.
pub const SH_VAR: &str = r"(\$\b\w+\b)|(\$\{.+?\})|(\$\(.+?\))";

/// `#` to end of line.
pub const SH_COMMENT: &str = r"#[^\r\n]*";

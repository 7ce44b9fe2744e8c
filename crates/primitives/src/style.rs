/// Closed palette of highlight categories.
///
/// Grammars tag matches with one of these; hosts decide how each tag is
/// rendered. [`StyleTag::color`] gives the stock foreground colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleTag {
	Keyword,
	Type,
	ClassName,
	Number,
	Annotation,
	Constant,
	Operator,
	Comment,
	Tag,
	Attribute,
	StringLiteral,
	Header,
	Emphasis,
	Link,
	Code,
	Variable,
}

impl StyleTag {
	/// Every tag, in declaration order.
	pub const ALL: [StyleTag; 16] = [
		Self::Keyword,
		Self::Type,
		Self::ClassName,
		Self::Number,
		Self::Annotation,
		Self::Constant,
		Self::Operator,
		Self::Comment,
		Self::Tag,
		Self::Attribute,
		Self::StringLiteral,
		Self::Header,
		Self::Emphasis,
		Self::Link,
		Self::Code,
		Self::Variable,
	];

	/// Returns the scope-style name of this tag.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Keyword => "keyword",
			Self::Type => "type",
			Self::ClassName => "class",
			Self::Number => "number",
			Self::Annotation => "annotation",
			Self::Constant => "constant",
			Self::Operator => "operator",
			Self::Comment => "comment",
			Self::Tag => "tag",
			Self::Attribute => "attribute",
			Self::StringLiteral => "string",
			Self::Header => "header",
			Self::Emphasis => "emphasis",
			Self::Link => "link",
			Self::Code => "code",
			Self::Variable => "variable",
		}
	}

	/// Returns the stock foreground colour for this tag.
	pub const fn color(self) -> Color {
		match self {
			Self::Keyword | Self::Annotation | Self::Operator | Self::Tag | Self::Link | Self::Code => Color::Cyan,
			Self::Type | Self::Attribute | Self::Emphasis | Self::Variable => Color::Magenta,
			Self::ClassName | Self::Header => Color::Blue,
			Self::Number => Color::Yellow,
			Self::Constant => Color::LightGray,
			Self::Comment | Self::StringLiteral => Color::Red,
		}
	}
}

impl std::fmt::Display for StyleTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Foreground colours used by the stock palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
	Cyan,
	Magenta,
	Blue,
	Yellow,
	LightGray,
	Red,
}

impl Color {
	/// Returns the ANSI SGR foreground code for this colour.
	pub const fn ansi_fg(self) -> u8 {
		match self {
			Self::Red => 31,
			Self::Yellow => 33,
			Self::Blue => 34,
			Self::Magenta => 35,
			Self::Cyan => 36,
			Self::LightGray => 37,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_unique() {
		let mut names: Vec<_> = StyleTag::ALL.iter().map(|t| t.as_str()).collect();
		names.sort_unstable();
		names.dedup();
		assert_eq!(names.len(), StyleTag::ALL.len());
	}

	#[test]
	fn comments_and_strings_share_red() {
		assert_eq!(StyleTag::Comment.color(), Color::Red);
		assert_eq!(StyleTag::StringLiteral.color(), Color::Red);
		assert_eq!(Color::Red.ansi_fg(), 31);
	}
}

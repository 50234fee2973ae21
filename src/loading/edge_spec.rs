/// Edge input in one of the two accepted forms.
///
/// Both forms produce identical adjacency structures for identical
/// content, but they disagree on how to treat bad input: the line-map
/// form skips pairs that name an undeclared station, while the flat
/// form treats any malformed or dangling line as a hard error.
#[derive(Debug, Clone)]
pub enum EdgeSpec {
    /// Ordered `(line name, station pairs)` groups.
    LineMap(Vec<(String, Vec<(String, String)>)>),
    /// One `origin - destination - line` triple per text line.
    FlatText(String),
}

impl EdgeSpec {
    /// Convenience constructor for the line-map form from borrowed data.
    pub fn line_map<'a, I, P>(groups: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, P)>,
        P: IntoIterator<Item = (&'a str, &'a str)>,
    {
        EdgeSpec::LineMap(
            groups
                .into_iter()
                .map(|(line, pairs)| {
                    let pairs = pairs
                        .into_iter()
                        .map(|(a, b)| (a.to_string(), b.to_string()))
                        .collect();
                    (line.to_string(), pairs)
                })
                .collect(),
        )
    }

    pub fn flat_text(text: impl Into<String>) -> Self {
        EdgeSpec::FlatText(text.into())
    }
}

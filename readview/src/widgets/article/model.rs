/// Static article rendered by the reader.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleContent {
    pub(crate) title: &'static str,
    pub(crate) paragraphs: &'static [&'static str],
}

pub(crate) const SAMPLE_ARTICLE: ArticleContent = ArticleContent {
    title: "A portrait of western Switzerland",
    paragraphs: &[
        "The lakes of western Switzerland sit between the Jura ridge and the \
         Alps. Vineyards climb the slopes above the water in narrow terraces \
         held up by stone walls that are older than most of the villages \
         below them.",
        "Lausanne is built on three hills, so a walk from the harbour to the \
         cathedral is mostly stairs. The old town keeps a night watchman who \
         still calls the hours from the bell tower between ten in the evening \
         and two in the morning.",
        "Further along the shore, Montreux trades on its jazz festival and on \
         the castle of Chillon, which stands on a rock a few metres from the \
         bank. In winter the promenade is quiet and the mountains across the \
         lake turn the colour of slate.",
        "Trains here run on the minute. A regional pass covers the boats as \
         well, and the paddle steamers that cross to the French side are the \
         slowest and most pleasant way to see the whole coastline at once.",
    ],
};

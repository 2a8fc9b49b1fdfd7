pub(crate) mod article;
pub(crate) mod article_params;

pub(crate) struct Widgets {
    pub(crate) article_params: article_params::ArticleParamsWidget,
}

pub(crate) mod article_page;

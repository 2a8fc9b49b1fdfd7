pub(crate) mod arrow_button;
pub(crate) mod params_form;

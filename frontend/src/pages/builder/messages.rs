#[derive(Clone)]
pub enum Msg {
    PickTemplate(String),
    SetTheme { role: String, value: String },
    SetVisibility { section: String, visible: bool },
    SetField { section: String, field: String, value: String },
    /// Edits one entry of an object-valued field, e.g. `donate.cta.label`.
    SetNestedField { section: String, field: String, entry: String, value: String },
    HeroImageSelected(web_sys::File),
    HeroImageLoaded(String),
    GoBack,
}

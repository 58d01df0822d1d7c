/// The five document kinds the service stores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    Program,
    Post,
    Testimonial,
    Inquiry,
    Stat,
}

impl Kind {
    /// Name of the collection holding documents of this kind.
    pub const fn collection(self) -> &'static str {
        match self {
            Kind::Program => "program",
            Kind::Post => "post",
            Kind::Testimonial => "testimonial",
            Kind::Inquiry => "inquiry",
            Kind::Stat => "stat",
        }
    }
}

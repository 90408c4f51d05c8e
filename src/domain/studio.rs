#[derive(Clone, PartialEq, Debug)]
pub struct Studio {
    pub name: &'static str,
    pub address: &'static str,
    /// Empty when the studio has no website.
    pub website: &'static str,
    /// Empty when the studio has no listed phone number.
    pub phone: &'static str,
    /// Teaches pottery or ceramics classes to the public.
    pub classes: bool,
    /// Members can use the studio independently.
    pub open_studio: bool,
    /// Run by or for member artists, co-op or collective style.
    pub member_studios: bool,
    pub notes: &'static str,
}

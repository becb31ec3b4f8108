wire_enum! {
    /// Channel categories used to filter `epg/list`
    pub enum Genre: u8 as "genre" {
        Favorites = 0,
        /// Terrestrial, general purpose, home shopping
        General = 1,
        /// Drama, entertainment, music
        Entertainment = 2,
        /// Movies, series
        Movies = 3,
        /// Sports, leisure
        Sports = 4,
        /// Animation, kids, educational
        Kids = 5,
        /// Documentary, self-improvement, religion
        Documentary = 6,
        /// News, financial
        News = 7,
        /// Public access, information
        PublicAccess = 8,
        Open = 9,
        Charged = 10,
    }
}

impl Default for Genre {
    fn default() -> Self {
        Genre::Favorites
    }
}

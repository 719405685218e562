pub mod models;
pub mod slug;
pub mod validation;

pub use models::{
    AboutContent, Artist, ArtistProfile, Artwork, BookingRequest, CreateArtist, CreateArtwork,
    CreateBooking, CreateExample, CreateJournalEntry, CreateWorkshop, JournalEntry, LoginRequest,
    LoginResponse, UpdateArtist, UpdateArtwork, UpdateExample, UpdateJournalEntry, UpdateWorkshop,
    UpsertAbout, Workshop, WorkshopExample,
};
pub use slug::slugify;
pub use validation::ValidationError;

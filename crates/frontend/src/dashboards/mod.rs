pub mod d400_school_overview;

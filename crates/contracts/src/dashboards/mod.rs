pub mod d100_revenue_overview;

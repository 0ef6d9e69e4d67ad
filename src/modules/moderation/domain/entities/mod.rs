pub mod movie_report;

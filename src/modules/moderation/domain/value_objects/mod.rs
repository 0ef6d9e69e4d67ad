pub mod report_status;

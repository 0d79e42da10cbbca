pub mod report_queries;

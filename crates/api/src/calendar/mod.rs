pub mod get_calendar_view;

pub mod recording_view;

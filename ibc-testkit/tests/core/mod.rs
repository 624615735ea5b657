pub mod ics04_channel;

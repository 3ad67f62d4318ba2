pub mod weather_frame;

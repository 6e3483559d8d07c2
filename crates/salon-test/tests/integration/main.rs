mod booking;
mod calendar;
mod feed;
mod helpers;
mod layout;

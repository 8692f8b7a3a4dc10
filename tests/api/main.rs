mod health_check;
mod pages;

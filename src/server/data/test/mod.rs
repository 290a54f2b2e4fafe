mod order;
mod recipient;
mod school;

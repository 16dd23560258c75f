mod school;
mod student;

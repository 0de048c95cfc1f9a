mod fixed;

mod quaternion;

mod bounding_box_corners;
mod bounding_box_rotation;

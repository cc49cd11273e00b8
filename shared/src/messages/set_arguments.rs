use crate::{
    entity::{BlobFields, Blob3DFields, CursorFields, Object3DFields, ObjectFields},
    messages::{arg_reader::ArgReader, error::MessageError, profile::Dimension, raw_message::OscArg},
};

/// Positional layout of the arguments following the session id in a `set`
/// message.
///
/// Layouts vary with the profile's dimension: 2.5D and 3D profiles insert a
/// depth coordinate and a depth speed, planar ones leave them at zero.
pub trait SetArguments: Sized {
    fn read_args(dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError>;

    fn write_args(&self, dimension: Dimension, args: &mut Vec<OscArg>);
}

fn depth(dimension: Dimension, reader: &mut ArgReader, name: &'static str) -> Result<f32, MessageError> {
    if dimension.has_depth() {
        reader.float(name)
    } else {
        Ok(0.0)
    }
}

fn push_floats(args: &mut Vec<OscArg>, values: &[f32]) {
    args.extend(values.iter().map(|value| OscArg::Float(*value)));
}

impl SetArguments for CursorFields {
    fn read_args(dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError> {
        let x = reader.float("x")?;
        let y = reader.float("y")?;
        let z = depth(dimension, reader, "z")?;
        let x_speed = reader.float("x speed")?;
        let y_speed = reader.float("y speed")?;
        let z_speed = depth(dimension, reader, "z speed")?;
        let motion_accel = reader.float("motion acceleration")?;

        Ok(CursorFields {
            x,
            y,
            z,
            x_speed,
            y_speed,
            z_speed,
            motion_accel,
        })
    }

    fn write_args(&self, dimension: Dimension, args: &mut Vec<OscArg>) {
        if dimension.has_depth() {
            push_floats(
                args,
                &[self.x, self.y, self.z, self.x_speed, self.y_speed, self.z_speed, self.motion_accel],
            );
        } else {
            push_floats(args, &[self.x, self.y, self.x_speed, self.y_speed, self.motion_accel]);
        }
    }
}

impl SetArguments for ObjectFields {
    fn read_args(dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError> {
        let symbol_id = reader.int("symbol id")?;
        let x = reader.float("x")?;
        let y = reader.float("y")?;
        let z = depth(dimension, reader, "z")?;
        let angle = reader.float("angle")?;
        let x_speed = reader.float("x speed")?;
        let y_speed = reader.float("y speed")?;
        let z_speed = depth(dimension, reader, "z speed")?;
        let rotation_speed = reader.float("rotation speed")?;
        let motion_accel = reader.float("motion acceleration")?;
        let rotation_accel = reader.float("rotation acceleration")?;

        Ok(ObjectFields {
            symbol_id,
            x,
            y,
            z,
            angle,
            x_speed,
            y_speed,
            z_speed,
            rotation_speed,
            motion_accel,
            rotation_accel,
        })
    }

    fn write_args(&self, dimension: Dimension, args: &mut Vec<OscArg>) {
        args.push(OscArg::Int(self.symbol_id));
        if dimension.has_depth() {
            push_floats(
                args,
                &[
                    self.x,
                    self.y,
                    self.z,
                    self.angle,
                    self.x_speed,
                    self.y_speed,
                    self.z_speed,
                    self.rotation_speed,
                    self.motion_accel,
                    self.rotation_accel,
                ],
            );
        } else {
            push_floats(
                args,
                &[
                    self.x,
                    self.y,
                    self.angle,
                    self.x_speed,
                    self.y_speed,
                    self.rotation_speed,
                    self.motion_accel,
                    self.rotation_accel,
                ],
            );
        }
    }
}

impl SetArguments for Object3DFields {
    fn read_args(_dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError> {
        Ok(Object3DFields {
            symbol_id: reader.int("symbol id")?,
            x: reader.float("x")?,
            y: reader.float("y")?,
            z: reader.float("z")?,
            roll: reader.float("roll")?,
            pitch: reader.float("pitch")?,
            yaw: reader.float("yaw")?,
            x_speed: reader.float("x speed")?,
            y_speed: reader.float("y speed")?,
            z_speed: reader.float("z speed")?,
            roll_speed: reader.float("roll speed")?,
            pitch_speed: reader.float("pitch speed")?,
            yaw_speed: reader.float("yaw speed")?,
            motion_accel: reader.float("motion acceleration")?,
            rotation_accel: reader.float("rotation acceleration")?,
        })
    }

    fn write_args(&self, _dimension: Dimension, args: &mut Vec<OscArg>) {
        args.push(OscArg::Int(self.symbol_id));
        push_floats(
            args,
            &[
                self.x,
                self.y,
                self.z,
                self.roll,
                self.pitch,
                self.yaw,
                self.x_speed,
                self.y_speed,
                self.z_speed,
                self.roll_speed,
                self.pitch_speed,
                self.yaw_speed,
                self.motion_accel,
                self.rotation_accel,
            ],
        );
    }
}

impl SetArguments for BlobFields {
    fn read_args(dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError> {
        let x = reader.float("x")?;
        let y = reader.float("y")?;
        let z = depth(dimension, reader, "z")?;
        let angle = reader.float("angle")?;
        let width = reader.float("width")?;
        let height = reader.float("height")?;
        let area = reader.float("area")?;
        let x_speed = reader.float("x speed")?;
        let y_speed = reader.float("y speed")?;
        let z_speed = depth(dimension, reader, "z speed")?;
        let rotation_speed = reader.float("rotation speed")?;
        let motion_accel = reader.float("motion acceleration")?;
        let rotation_accel = reader.float("rotation acceleration")?;

        Ok(BlobFields {
            x,
            y,
            z,
            angle,
            width,
            height,
            area,
            x_speed,
            y_speed,
            z_speed,
            rotation_speed,
            motion_accel,
            rotation_accel,
        })
    }

    fn write_args(&self, dimension: Dimension, args: &mut Vec<OscArg>) {
        if dimension.has_depth() {
            push_floats(
                args,
                &[
                    self.x,
                    self.y,
                    self.z,
                    self.angle,
                    self.width,
                    self.height,
                    self.area,
                    self.x_speed,
                    self.y_speed,
                    self.z_speed,
                    self.rotation_speed,
                    self.motion_accel,
                    self.rotation_accel,
                ],
            );
        } else {
            push_floats(
                args,
                &[
                    self.x,
                    self.y,
                    self.angle,
                    self.width,
                    self.height,
                    self.area,
                    self.x_speed,
                    self.y_speed,
                    self.rotation_speed,
                    self.motion_accel,
                    self.rotation_accel,
                ],
            );
        }
    }
}

impl SetArguments for Blob3DFields {
    fn read_args(_dimension: Dimension, reader: &mut ArgReader) -> Result<Self, MessageError> {
        Ok(Blob3DFields {
            x: reader.float("x")?,
            y: reader.float("y")?,
            z: reader.float("z")?,
            roll: reader.float("roll")?,
            pitch: reader.float("pitch")?,
            yaw: reader.float("yaw")?,
            width: reader.float("width")?,
            height: reader.float("height")?,
            depth: reader.float("depth")?,
            volume: reader.float("volume")?,
            x_speed: reader.float("x speed")?,
            y_speed: reader.float("y speed")?,
            z_speed: reader.float("z speed")?,
            roll_speed: reader.float("roll speed")?,
            pitch_speed: reader.float("pitch speed")?,
            yaw_speed: reader.float("yaw speed")?,
            motion_accel: reader.float("motion acceleration")?,
            rotation_accel: reader.float("rotation acceleration")?,
        })
    }

    fn write_args(&self, _dimension: Dimension, args: &mut Vec<OscArg>) {
        push_floats(
            args,
            &[
                self.x,
                self.y,
                self.z,
                self.roll,
                self.pitch,
                self.yaw,
                self.width,
                self.height,
                self.depth,
                self.volume,
                self.x_speed,
                self.y_speed,
                self.z_speed,
                self.roll_speed,
                self.pitch_speed,
                self.yaw_speed,
                self.motion_accel,
                self.rotation_accel,
            ],
        );
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! The table of wrapped OpenGL entry points.
//!
//! Everything that has to enumerate the wrapped API (the [GLFunc] registry,
//! the [super::GL] trait and each implementation of it) is generated from the
//! single list in [with_gl_functions], so none of them can get out of sync
//! with the others. A module that needs the list defines a `macro_rules!`
//! macro accepting entries of the form
//!
//! ```text
//! #[suppressible] fn Name(arg: Type, ...) -> Ret;
//! ```
//!
//! and passes its name to [with_gl_functions]. The attribute is optional and
//! marks the geometry-emitting calls that draw suppression applies to.
//!
//! Signatures must match what `gl_generator` produces for the same entry
//! point, since [super::gl_native] forwards to those bindings directly.

/// Invoke `$callback!` with the full list of wrapped entry points.
macro_rules! with_gl_functions {
    ($callback:ident) => {
        $callback! {
            // Generic state manipulation and queries
            fn GetError() -> GLenum;
            fn GetGraphicsResetStatus() -> GLenum;
            fn Enable(cap: GLenum);
            fn Disable(cap: GLenum);
            fn IsEnabled(cap: GLenum) -> GLboolean;
            fn Enablei(target: GLenum, index: GLuint);
            fn Disablei(target: GLenum, index: GLuint);
            fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
            fn EnableClientState(array: GLenum);
            fn DisableClientState(array: GLenum);
            fn ActiveTexture(texture: GLenum);
            fn ClientActiveTexture(texture: GLenum);
            fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
            fn GetDoublev(pname: GLenum, data: *mut GLdouble);
            fn GetFloatv(pname: GLenum, data: *mut GLfloat);
            fn GetIntegerv(pname: GLenum, data: *mut GLint);
            fn GetInteger64v(pname: GLenum, data: *mut GLint64);
            fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
            fn GetString(name: GLenum) -> *const GLubyte;
            fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
            fn Hint(target: GLenum, mode: GLenum);
            fn Finish();
            fn Flush();
            fn PixelStorei(pname: GLenum, param: GLint);
            fn PixelStoref(pname: GLenum, param: GLfloat);
            fn PushAttrib(mask: GLbitfield);
            fn PopAttrib();
            fn PushClientAttrib(mask: GLbitfield);
            fn PopClientAttrib();

            // Per-fragment operations and rasterization state
            fn Clear(mask: GLbitfield);
            fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
            fn ClearDepth(depth: GLdouble);
            fn ClearDepthf(depth: GLfloat);
            fn ClearStencil(s: GLint);
            fn ClearAccum(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
            fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
            fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
            fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
            fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
            fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
            fn DepthMask(flag: GLboolean);
            fn DepthFunc(func: GLenum);
            fn DepthRange(near: GLdouble, far: GLdouble);
            fn StencilFunc(func: GLenum, ref_: GLint, mask: GLuint);
            fn StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
            fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
            fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
            fn StencilMask(mask: GLuint);
            fn StencilMaskSeparate(face: GLenum, mask: GLuint);
            fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
            fn BlendFuncSeparate(
                sfactor_rgb: GLenum,
                dfactor_rgb: GLenum,
                sfactor_alpha: GLenum,
                dfactor_alpha: GLenum,
            );
            fn BlendEquation(mode: GLenum);
            fn BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum);
            fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
            fn AlphaFunc(func: GLenum, ref_: GLfloat);
            fn LogicOp(opcode: GLenum);
            fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
            fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
            fn CullFace(mode: GLenum);
            fn FrontFace(mode: GLenum);
            fn PolygonMode(face: GLenum, mode: GLenum);
            fn PolygonOffset(factor: GLfloat, units: GLfloat);
            fn LineWidth(width: GLfloat);
            fn LineStipple(factor: GLint, pattern: GLushort);
            fn PointSize(size: GLfloat);
            fn PointParameterf(pname: GLenum, param: GLfloat);
            fn PointParameteri(pname: GLenum, param: GLint);
            fn ShadeModel(mode: GLenum);
            fn SampleCoverage(value: GLfloat, invert: GLboolean);
            fn PrimitiveRestartIndex(index: GLuint);

            // Fixed-function matrix stack
            fn MatrixMode(mode: GLenum);
            fn LoadIdentity();
            fn LoadMatrixf(m: *const GLfloat);
            fn LoadMatrixd(m: *const GLdouble);
            fn MultMatrixf(m: *const GLfloat);
            fn MultMatrixd(m: *const GLdouble);
            fn PushMatrix();
            fn PopMatrix();
            fn Ortho(
                left: GLdouble,
                right: GLdouble,
                bottom: GLdouble,
                top: GLdouble,
                near: GLdouble,
                far: GLdouble,
            );
            fn Frustum(
                left: GLdouble,
                right: GLdouble,
                bottom: GLdouble,
                top: GLdouble,
                near: GLdouble,
                far: GLdouble,
            );
            fn Rotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
            fn Rotated(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble);
            fn Scalef(x: GLfloat, y: GLfloat, z: GLfloat);
            fn Scaled(x: GLdouble, y: GLdouble, z: GLdouble);
            fn Translatef(x: GLfloat, y: GLfloat, z: GLfloat);
            fn Translated(x: GLdouble, y: GLdouble, z: GLdouble);

            // Lighting, materials, fog and texture environment
            fn Lightf(light: GLenum, pname: GLenum, param: GLfloat);
            fn Lightfv(light: GLenum, pname: GLenum, params: *const GLfloat);
            fn Lighti(light: GLenum, pname: GLenum, param: GLint);
            fn LightModelf(pname: GLenum, param: GLfloat);
            fn LightModelfv(pname: GLenum, params: *const GLfloat);
            fn LightModeli(pname: GLenum, param: GLint);
            fn Materialf(face: GLenum, pname: GLenum, param: GLfloat);
            fn Materialfv(face: GLenum, pname: GLenum, params: *const GLfloat);
            fn ColorMaterial(face: GLenum, mode: GLenum);
            fn Fogf(pname: GLenum, param: GLfloat);
            fn Fogfv(pname: GLenum, params: *const GLfloat);
            fn Fogi(pname: GLenum, param: GLint);
            fn TexEnvf(target: GLenum, pname: GLenum, param: GLfloat);
            fn TexEnvi(target: GLenum, pname: GLenum, param: GLint);
            fn TexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat);
            fn TexGeni(coord: GLenum, pname: GLenum, param: GLint);
            fn TexGenfv(coord: GLenum, pname: GLenum, params: *const GLfloat);

            // Immediate mode
            fn Begin(mode: GLenum);
            fn End();
            #[suppressible] fn Vertex2f(x: GLfloat, y: GLfloat);
            #[suppressible] fn Vertex2d(x: GLdouble, y: GLdouble);
            #[suppressible] fn Vertex2i(x: GLint, y: GLint);
            #[suppressible] fn Vertex3f(x: GLfloat, y: GLfloat, z: GLfloat);
            #[suppressible] fn Vertex3d(x: GLdouble, y: GLdouble, z: GLdouble);
            #[suppressible] fn Vertex3i(x: GLint, y: GLint, z: GLint);
            #[suppressible] fn Vertex4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
            #[suppressible] fn Vertex4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
            #[suppressible] fn Vertex2fv(v: *const GLfloat);
            #[suppressible] fn Vertex3fv(v: *const GLfloat);
            #[suppressible] fn Vertex3dv(v: *const GLdouble);
            #[suppressible] fn Vertex4fv(v: *const GLfloat);
            #[suppressible] fn Color3f(red: GLfloat, green: GLfloat, blue: GLfloat);
            #[suppressible] fn Color3d(red: GLdouble, green: GLdouble, blue: GLdouble);
            #[suppressible] fn Color3ub(red: GLubyte, green: GLubyte, blue: GLubyte);
            #[suppressible] fn Color4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
            #[suppressible] fn Color4d(
                red: GLdouble,
                green: GLdouble,
                blue: GLdouble,
                alpha: GLdouble,
            );
            #[suppressible] fn Color4ub(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte);
            #[suppressible] fn Color3fv(v: *const GLfloat);
            #[suppressible] fn Color4fv(v: *const GLfloat);
            #[suppressible] fn Color4ubv(v: *const GLubyte);
            #[suppressible] fn TexCoord1f(s: GLfloat);
            #[suppressible] fn TexCoord2f(s: GLfloat, t: GLfloat);
            #[suppressible] fn TexCoord2d(s: GLdouble, t: GLdouble);
            #[suppressible] fn TexCoord3f(s: GLfloat, t: GLfloat, r: GLfloat);
            #[suppressible] fn TexCoord4f(s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat);
            #[suppressible] fn TexCoord2fv(v: *const GLfloat);
            #[suppressible] fn MultiTexCoord2f(target: GLenum, s: GLfloat, t: GLfloat);
            fn Normal3f(nx: GLfloat, ny: GLfloat, nz: GLfloat);
            fn Normal3d(nx: GLdouble, ny: GLdouble, nz: GLdouble);
            fn Normal3fv(v: *const GLfloat);
            fn RasterPos2f(x: GLfloat, y: GLfloat);
            fn RasterPos3f(x: GLfloat, y: GLfloat, z: GLfloat);
            fn WindowPos2i(x: GLint, y: GLint);
            fn Rectf(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat);
            fn DrawPixels(
                width: GLsizei,
                height: GLsizei,
                format: GLenum,
                type_: GLenum,
                pixels: *const GLvoid,
            );
            fn CopyPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, type_: GLenum);
            fn Bitmap(
                width: GLsizei,
                height: GLsizei,
                xorig: GLfloat,
                yorig: GLfloat,
                xmove: GLfloat,
                ymove: GLfloat,
                bitmap: *const GLubyte,
            );
            fn Accum(op: GLenum, value: GLfloat);

            // Display lists
            fn GenLists(range: GLsizei) -> GLuint;
            fn DeleteLists(list: GLuint, range: GLsizei);
            fn IsList(list: GLuint) -> GLboolean;
            fn NewList(list: GLuint, mode: GLenum);
            fn EndList();
            fn CallList(list: GLuint);
            fn CallLists(n: GLsizei, type_: GLenum, lists: *const GLvoid);
            fn ListBase(base: GLuint);

            // Client-side vertex arrays
            fn VertexPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid);
            fn ColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid);
            fn TexCoordPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid);
            fn NormalPointer(type_: GLenum, stride: GLsizei, pointer: *const GLvoid);
            fn InterleavedArrays(format: GLenum, stride: GLsizei, pointer: *const GLvoid);
            #[suppressible] fn ArrayElement(i: GLint);

            // Drawing
            #[suppressible] fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
            #[suppressible] fn DrawArraysInstanced(
                mode: GLenum,
                first: GLint,
                count: GLsizei,
                instancecount: GLsizei,
            );
            #[suppressible] fn DrawArraysInstancedBaseInstance(
                mode: GLenum,
                first: GLint,
                count: GLsizei,
                instancecount: GLsizei,
                baseinstance: GLuint,
            );
            #[suppressible] fn DrawArraysIndirect(mode: GLenum, indirect: *const GLvoid);
            #[suppressible] fn DrawElements(
                mode: GLenum,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
            );
            #[suppressible] fn DrawElementsBaseVertex(
                mode: GLenum,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
                basevertex: GLint,
            );
            #[suppressible] fn DrawElementsInstanced(
                mode: GLenum,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
                instancecount: GLsizei,
            );
            #[suppressible] fn DrawElementsInstancedBaseInstance(
                mode: GLenum,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
                instancecount: GLsizei,
                baseinstance: GLuint,
            );
            #[suppressible] fn DrawElementsInstancedBaseVertex(
                mode: GLenum,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
                instancecount: GLsizei,
                basevertex: GLint,
            );
            #[suppressible] fn DrawElementsInstancedBaseVertexBaseInstance(
                mode: GLenum,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
                instancecount: GLsizei,
                basevertex: GLint,
                baseinstance: GLuint,
            );
            #[suppressible] fn DrawElementsIndirect(
                mode: GLenum,
                type_: GLenum,
                indirect: *const GLvoid,
            );
            #[suppressible] fn DrawRangeElements(
                mode: GLenum,
                start: GLuint,
                end: GLuint,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
            );
            #[suppressible] fn DrawRangeElementsBaseVertex(
                mode: GLenum,
                start: GLuint,
                end: GLuint,
                count: GLsizei,
                type_: GLenum,
                indices: *const GLvoid,
                basevertex: GLint,
            );
            #[suppressible] fn MultiDrawArrays(
                mode: GLenum,
                first: *const GLint,
                count: *const GLsizei,
                drawcount: GLsizei,
            );
            #[suppressible] fn MultiDrawElements(
                mode: GLenum,
                count: *const GLsizei,
                type_: GLenum,
                indices: *const *const GLvoid,
                drawcount: GLsizei,
            );
            #[suppressible] fn MultiDrawArraysIndirect(
                mode: GLenum,
                indirect: *const GLvoid,
                drawcount: GLsizei,
                stride: GLsizei,
            );
            #[suppressible] fn MultiDrawElementsIndirect(
                mode: GLenum,
                type_: GLenum,
                indirect: *const GLvoid,
                drawcount: GLsizei,
                stride: GLsizei,
            );
            #[suppressible] fn DrawTransformFeedback(mode: GLenum, id: GLuint);
            #[suppressible] fn DrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);

            // Buffer objects
            fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
            fn CreateBuffers(n: GLsizei, buffers: *mut GLuint);
            fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
            fn IsBuffer(buffer: GLuint) -> GLboolean;
            fn BindBuffer(target: GLenum, buffer: GLuint);
            fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
            fn BindBufferRange(
                target: GLenum,
                index: GLuint,
                buffer: GLuint,
                offset: GLintptr,
                size: GLsizeiptr,
            );
            fn BufferData(target: GLenum, size: GLsizeiptr, data: *const GLvoid, usage: GLenum);
            fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const GLvoid);
            fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const GLvoid, flags: GLbitfield);
            fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const GLvoid, usage: GLenum);
            fn NamedBufferSubData(
                buffer: GLuint,
                offset: GLintptr,
                size: GLsizeiptr,
                data: *const GLvoid,
            );
            fn NamedBufferStorage(
                buffer: GLuint,
                size: GLsizeiptr,
                data: *const GLvoid,
                flags: GLbitfield,
            );
            fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut GLvoid);
            fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
            fn MapBuffer(target: GLenum, access: GLenum) -> *mut GLvoid;
            fn MapBufferRange(
                target: GLenum,
                offset: GLintptr,
                length: GLsizeiptr,
                access: GLbitfield,
            ) -> *mut GLvoid;
            fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
            fn UnmapBuffer(target: GLenum) -> GLboolean;
            fn CopyBufferSubData(
                read_target: GLenum,
                write_target: GLenum,
                read_offset: GLintptr,
                write_offset: GLintptr,
                size: GLsizeiptr,
            );

            // Vertex array objects and generic attributes
            fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint);
            fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
            fn BindVertexArray(array: GLuint);
            fn IsVertexArray(array: GLuint) -> GLboolean;
            fn EnableVertexAttribArray(index: GLuint);
            fn DisableVertexAttribArray(index: GLuint);
            fn VertexAttribPointer(
                index: GLuint,
                size: GLint,
                type_: GLenum,
                normalized: GLboolean,
                stride: GLsizei,
                pointer: *const GLvoid,
            );
            fn VertexAttribIPointer(
                index: GLuint,
                size: GLint,
                type_: GLenum,
                stride: GLsizei,
                pointer: *const GLvoid,
            );
            fn VertexAttribDivisor(index: GLuint, divisor: GLuint);
            fn VertexAttribFormat(
                attribindex: GLuint,
                size: GLint,
                type_: GLenum,
                normalized: GLboolean,
                relativeoffset: GLuint,
            );
            fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
            fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
            fn VertexAttrib1f(index: GLuint, x: GLfloat);
            fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
            fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
            fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
            fn VertexAttrib4fv(index: GLuint, v: *const GLfloat);
            fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
            fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);

            // Textures and samplers
            fn GenTextures(n: GLsizei, textures: *mut GLuint);
            fn DeleteTextures(n: GLsizei, textures: *const GLuint);
            fn BindTexture(target: GLenum, texture: GLuint);
            fn BindTextureUnit(unit: GLuint, texture: GLuint);
            fn IsTexture(texture: GLuint) -> GLboolean;
            fn TexImage1D(
                target: GLenum,
                level: GLint,
                internalformat: GLint,
                width: GLsizei,
                border: GLint,
                format: GLenum,
                type_: GLenum,
                pixels: *const GLvoid,
            );
            fn TexImage2D(
                target: GLenum,
                level: GLint,
                internalformat: GLint,
                width: GLsizei,
                height: GLsizei,
                border: GLint,
                format: GLenum,
                type_: GLenum,
                pixels: *const GLvoid,
            );
            fn TexImage3D(
                target: GLenum,
                level: GLint,
                internalformat: GLint,
                width: GLsizei,
                height: GLsizei,
                depth: GLsizei,
                border: GLint,
                format: GLenum,
                type_: GLenum,
                pixels: *const GLvoid,
            );
            fn TexSubImage2D(
                target: GLenum,
                level: GLint,
                xoffset: GLint,
                yoffset: GLint,
                width: GLsizei,
                height: GLsizei,
                format: GLenum,
                type_: GLenum,
                pixels: *const GLvoid,
            );
            fn TexSubImage3D(
                target: GLenum,
                level: GLint,
                xoffset: GLint,
                yoffset: GLint,
                zoffset: GLint,
                width: GLsizei,
                height: GLsizei,
                depth: GLsizei,
                format: GLenum,
                type_: GLenum,
                pixels: *const GLvoid,
            );
            fn TexStorage2D(
                target: GLenum,
                levels: GLsizei,
                internalformat: GLenum,
                width: GLsizei,
                height: GLsizei,
            );
            fn TexStorage3D(
                target: GLenum,
                levels: GLsizei,
                internalformat: GLenum,
                width: GLsizei,
                height: GLsizei,
                depth: GLsizei,
            );
            fn CompressedTexImage2D(
                target: GLenum,
                level: GLint,
                internalformat: GLenum,
                width: GLsizei,
                height: GLsizei,
                border: GLint,
                image_size: GLsizei,
                data: *const GLvoid,
            );
            fn CompressedTexSubImage2D(
                target: GLenum,
                level: GLint,
                xoffset: GLint,
                yoffset: GLint,
                width: GLsizei,
                height: GLsizei,
                format: GLenum,
                image_size: GLsizei,
                data: *const GLvoid,
            );
            fn CopyTexImage2D(
                target: GLenum,
                level: GLint,
                internalformat: GLenum,
                x: GLint,
                y: GLint,
                width: GLsizei,
                height: GLsizei,
                border: GLint,
            );
            fn CopyTexSubImage2D(
                target: GLenum,
                level: GLint,
                xoffset: GLint,
                yoffset: GLint,
                x: GLint,
                y: GLint,
                width: GLsizei,
                height: GLsizei,
            );
            fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
            fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
            fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
            fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
            fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
            fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
            fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
            fn GetTexImage(
                target: GLenum,
                level: GLint,
                format: GLenum,
                type_: GLenum,
                pixels: *mut GLvoid,
            );
            fn GenerateMipmap(target: GLenum);
            fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
            fn GenSamplers(count: GLsizei, samplers: *mut GLuint);
            fn DeleteSamplers(count: GLsizei, samplers: *const GLuint);
            fn BindSampler(unit: GLuint, sampler: GLuint);
            fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
            fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
            fn BindImageTexture(
                unit: GLuint,
                texture: GLuint,
                level: GLint,
                layered: GLboolean,
                layer: GLint,
                access: GLenum,
                format: GLenum,
            );

            // Framebuffers and renderbuffers
            fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
            fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
            fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
            fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
            fn CheckFramebufferStatus(target: GLenum) -> GLenum;
            fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
            fn FramebufferTexture2D(
                target: GLenum,
                attachment: GLenum,
                textarget: GLenum,
                texture: GLuint,
                level: GLint,
            );
            fn FramebufferTextureLayer(
                target: GLenum,
                attachment: GLenum,
                texture: GLuint,
                level: GLint,
                layer: GLint,
            );
            fn FramebufferRenderbuffer(
                target: GLenum,
                attachment: GLenum,
                renderbuffertarget: GLenum,
                renderbuffer: GLuint,
            );
            fn GetFramebufferAttachmentParameteriv(
                target: GLenum,
                attachment: GLenum,
                pname: GLenum,
                params: *mut GLint,
            );
            fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
            fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
            fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
            fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
            fn RenderbufferStorage(
                target: GLenum,
                internalformat: GLenum,
                width: GLsizei,
                height: GLsizei,
            );
            fn RenderbufferStorageMultisample(
                target: GLenum,
                samples: GLsizei,
                internalformat: GLenum,
                width: GLsizei,
                height: GLsizei,
            );
            fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
            fn BlitFramebuffer(
                src_x0: GLint,
                src_y0: GLint,
                src_x1: GLint,
                src_y1: GLint,
                dst_x0: GLint,
                dst_y0: GLint,
                dst_x1: GLint,
                dst_y1: GLint,
                mask: GLbitfield,
                filter: GLenum,
            );
            fn InvalidateFramebuffer(
                target: GLenum,
                num_attachments: GLsizei,
                attachments: *const GLenum,
            );
            fn DrawBuffer(buf: GLenum);
            fn DrawBuffers(n: GLsizei, bufs: *const GLenum);
            fn ReadBuffer(src: GLenum);
            fn ReadPixels(
                x: GLint,
                y: GLint,
                width: GLsizei,
                height: GLsizei,
                format: GLenum,
                type_: GLenum,
                pixels: *mut GLvoid,
            );

            // Shaders and programs
            fn CreateShader(type_: GLenum) -> GLuint;
            fn DeleteShader(shader: GLuint);
            fn IsShader(shader: GLuint) -> GLboolean;
            fn ShaderSource(
                shader: GLuint,
                count: GLsizei,
                string: *const *const GLchar,
                length: *const GLint,
            );
            fn CompileShader(shader: GLuint);
            fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
            fn GetShaderInfoLog(
                shader: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                info_log: *mut GLchar,
            );
            fn GetShaderSource(
                shader: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                source: *mut GLchar,
            );
            fn CreateProgram() -> GLuint;
            fn DeleteProgram(program: GLuint);
            fn IsProgram(program: GLuint) -> GLboolean;
            fn AttachShader(program: GLuint, shader: GLuint);
            fn DetachShader(program: GLuint, shader: GLuint);
            fn LinkProgram(program: GLuint);
            fn ValidateProgram(program: GLuint);
            fn UseProgram(program: GLuint);
            fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
            fn GetProgramInfoLog(
                program: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                info_log: *mut GLchar,
            );
            fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
            fn GetProgramBinary(
                program: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                binary_format: *mut GLenum,
                binary: *mut GLvoid,
            );
            fn ProgramBinary(
                program: GLuint,
                binary_format: GLenum,
                binary: *const GLvoid,
                length: GLsizei,
            );
            fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
            fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
            fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
            fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
            fn GetActiveAttrib(
                program: GLuint,
                index: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                size: *mut GLint,
                type_: *mut GLenum,
                name: *mut GLchar,
            );
            fn GetActiveUniform(
                program: GLuint,
                index: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                size: *mut GLint,
                type_: *mut GLenum,
                name: *mut GLchar,
            );
            fn GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
            fn UniformBlockBinding(
                program: GLuint,
                uniform_block_index: GLuint,
                uniform_block_binding: GLuint,
            );

            // Uniforms
            fn Uniform1f(location: GLint, v0: GLfloat);
            fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
            fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
            fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
            fn Uniform1i(location: GLint, v0: GLint);
            fn Uniform2i(location: GLint, v0: GLint, v1: GLint);
            fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
            fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
            fn Uniform1ui(location: GLint, v0: GLuint);
            fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
            fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
            fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
            fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
            fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint);
            fn UniformMatrix3fv(
                location: GLint,
                count: GLsizei,
                transpose: GLboolean,
                value: *const GLfloat,
            );
            fn UniformMatrix4fv(
                location: GLint,
                count: GLsizei,
                transpose: GLboolean,
                value: *const GLfloat,
            );
            fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
            fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
            fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint);
            fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat);
            fn ProgramUniformMatrix4fv(
                program: GLuint,
                location: GLint,
                count: GLsizei,
                transpose: GLboolean,
                value: *const GLfloat,
            );

            // Compute, tessellation and transform feedback
            fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
            fn DispatchComputeIndirect(indirect: GLintptr);
            fn MemoryBarrier(barriers: GLbitfield);
            fn PatchParameteri(pname: GLenum, value: GLint);
            fn TransformFeedbackVaryings(
                program: GLuint,
                count: GLsizei,
                varyings: *const *const GLchar,
                buffer_mode: GLenum,
            );
            fn GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
            fn DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint);
            fn BindTransformFeedback(target: GLenum, id: GLuint);
            fn BeginTransformFeedback(primitive_mode: GLenum);
            fn EndTransformFeedback();

            // Queries and sync objects
            fn GenQueries(n: GLsizei, ids: *mut GLuint);
            fn DeleteQueries(n: GLsizei, ids: *const GLuint);
            fn IsQuery(id: GLuint) -> GLboolean;
            fn BeginQuery(target: GLenum, id: GLuint);
            fn EndQuery(target: GLenum);
            fn QueryCounter(id: GLuint, target: GLenum);
            fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
            fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
            fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
            fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
            fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
            fn BeginConditionalRender(id: GLuint, mode: GLenum);
            fn EndConditionalRender();
            fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
            fn DeleteSync(sync: GLsync);
            fn IsSync(sync: GLsync) -> GLboolean;
            fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
            fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
            fn GetSynciv(
                sync: GLsync,
                pname: GLenum,
                count: GLsizei,
                length: *mut GLsizei,
                values: *mut GLint,
            );

            // Debug output
            fn DebugMessageControl(
                source: GLenum,
                type_: GLenum,
                severity: GLenum,
                count: GLsizei,
                ids: *const GLuint,
                enabled: GLboolean,
            );
            fn DebugMessageInsert(
                source: GLenum,
                type_: GLenum,
                id: GLuint,
                severity: GLenum,
                length: GLsizei,
                buf: *const GLchar,
            );
            fn GetDebugMessageLog(
                count: GLuint,
                buf_size: GLsizei,
                sources: *mut GLenum,
                types: *mut GLenum,
                ids: *mut GLuint,
                severities: *mut GLenum,
                lengths: *mut GLsizei,
                message_log: *mut GLchar,
            ) -> GLuint;
            fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
            fn PopDebugGroup();
            fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
            fn GetObjectLabel(
                identifier: GLenum,
                name: GLuint,
                buf_size: GLsizei,
                length: *mut GLsizei,
                label: *mut GLchar,
            );

            // EXT_framebuffer_object
            fn GenFramebuffersEXT(n: GLsizei, framebuffers: *mut GLuint);
            fn DeleteFramebuffersEXT(n: GLsizei, framebuffers: *const GLuint);
            fn BindFramebufferEXT(target: GLenum, framebuffer: GLuint);
            fn CheckFramebufferStatusEXT(target: GLenum) -> GLenum;
            fn FramebufferTexture2DEXT(
                target: GLenum,
                attachment: GLenum,
                textarget: GLenum,
                texture: GLuint,
                level: GLint,
            );
            fn GenRenderbuffersEXT(n: GLsizei, renderbuffers: *mut GLuint);
            fn BindRenderbufferEXT(target: GLenum, renderbuffer: GLuint);
            fn RenderbufferStorageEXT(
                target: GLenum,
                internalformat: GLenum,
                width: GLsizei,
                height: GLsizei,
            );
            fn FramebufferRenderbufferEXT(
                target: GLenum,
                attachment: GLenum,
                renderbuffertarget: GLenum,
                renderbuffer: GLuint,
            );
            fn GenerateMipmapEXT(target: GLenum);

            // NV_primitive_restart
            fn PrimitiveRestartNV();
            fn PrimitiveRestartIndexNV(index: GLuint);

            // ARB_bindless_texture
            fn GetTextureHandleARB(texture: GLuint) -> GLuint64;
            fn MakeTextureHandleResidentARB(handle: GLuint64);
            fn MakeTextureHandleNonResidentARB(handle: GLuint64);
        }
    };
}
pub(super) use with_gl_functions;

macro_rules! flag_is_set {
    (suppressible) => {
        true
    };
}

macro_rules! define_gl_func {
    ($(
        $(#[$flag:ident])?
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        /// Identifier of a wrapped OpenGL entry point, used to index
        /// [super::CallCounters].
        ///
        /// Variants are named after the entry point without its `gl` prefix.
        /// Their numeric values follow the order of the table and are not
        /// stable across builds.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        pub enum GLFunc {
            $($name,)*
        }

        impl GLFunc {
            /// Number of wrapped entry points.
            pub const COUNT: usize = [$(GLFunc::$name),*].len();

            /// Every wrapped entry point, in index order.
            pub const ALL: [GLFunc; GLFunc::COUNT] = [$(GLFunc::$name),*];

            /// Full name of the entry point, e.g. `"glDrawArrays"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(GLFunc::$name => concat!("gl", stringify!($name)),)*
                }
            }

            /// Whether draw suppression applies to this entry point.
            pub const fn is_suppressible(self) -> bool {
                match self {
                    $(GLFunc::$name => false $(|| flag_is_set!($flag))?,)*
                }
            }

            /// Look up an entry point by name. The `gl` prefix is optional.
            pub fn from_name(name: &str) -> Option<GLFunc> {
                let name = name.strip_prefix("gl").unwrap_or(name);
                GLFunc::ALL.into_iter().find(|func| &func.name()[2..] == name)
            }
        }
    };
}

with_gl_functions!(define_gl_func);

impl GLFunc {
    /// Entry points that are counted as draw calls in [super::FrameStatistics].
    ///
    /// `DrawBuffer` and `DrawBuffers` only select render targets and are left
    /// out, so these numbers are lower than those of tools that count every
    /// `glDraw*` entry point.
    pub const DRAW_CALLS: &'static [GLFunc] = &[
        GLFunc::DrawArrays,
        GLFunc::DrawArraysInstanced,
        GLFunc::DrawArraysInstancedBaseInstance,
        GLFunc::DrawArraysIndirect,
        GLFunc::DrawElements,
        GLFunc::DrawElementsBaseVertex,
        GLFunc::DrawElementsInstanced,
        GLFunc::DrawElementsInstancedBaseInstance,
        GLFunc::DrawElementsInstancedBaseVertex,
        GLFunc::DrawElementsInstancedBaseVertexBaseInstance,
        GLFunc::DrawElementsIndirect,
        GLFunc::DrawRangeElements,
        GLFunc::DrawRangeElementsBaseVertex,
        GLFunc::DrawTransformFeedback,
        GLFunc::DrawTransformFeedbackStream,
        GLFunc::MultiDrawArrays,
        GLFunc::MultiDrawElements,
        GLFunc::MultiDrawArraysIndirect,
        GLFunc::MultiDrawElementsIndirect,
    ];

    /// Index of this entry point in a [super::CallCounters] table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for GLFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The value returned in place of a real result when a call is not forwarded
/// to a driver: zero, a null pointer or nothing.
pub trait NullReturn {
    fn null_return() -> Self;
}
impl NullReturn for () {
    fn null_return() {}
}
impl<T> NullReturn for *const T {
    fn null_return() -> Self {
        std::ptr::null()
    }
}
impl<T> NullReturn for *mut T {
    fn null_return() -> Self {
        std::ptr::null_mut()
    }
}
macro_rules! impl_null_return_for_numbers {
    ($($t:ty),*) => {
        $(
            impl NullReturn for $t {
                fn null_return() -> Self {
                    0 as $t
                }
            }
        )*
    };
}
impl_null_return_for_numbers!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, &func) in GLFunc::ALL.iter().enumerate() {
            assert_eq!(func.index(), i);
        }
        assert_eq!(GLFunc::ALL.len(), GLFunc::COUNT);
    }

    #[test]
    fn names() {
        assert_eq!(GLFunc::Clear.name(), "glClear");
        assert_eq!(GLFunc::GetIntegeri_v.name(), "glGetIntegeri_v");
        assert_eq!(GLFunc::from_name("glDrawArrays"), Some(GLFunc::DrawArrays));
        assert_eq!(GLFunc::from_name("DrawArrays"), Some(GLFunc::DrawArrays));
        assert_eq!(GLFunc::from_name("glDoesNotExist"), None);
        for func in GLFunc::ALL {
            assert_eq!(GLFunc::from_name(func.name()), Some(func));
        }
    }

    #[test]
    fn suppressible_set() {
        assert!(GLFunc::Vertex3f.is_suppressible());
        assert!(GLFunc::Color4ub.is_suppressible());
        assert!(GLFunc::TexCoord2f.is_suppressible());
        assert!(GLFunc::DrawArrays.is_suppressible());
        assert!(GLFunc::MultiDrawElements.is_suppressible());
        assert!(!GLFunc::Clear.is_suppressible());
        assert!(!GLFunc::Begin.is_suppressible());
        assert!(!GLFunc::Normal3f.is_suppressible());
        assert!(!GLFunc::ReadPixels.is_suppressible());
        // Everything counted as a draw call can also be suppressed.
        for func in GLFunc::DRAW_CALLS {
            assert!(func.is_suppressible(), "{}", func);
        }
    }
}
